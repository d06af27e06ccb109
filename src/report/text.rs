/// Columnar text report with colored status tiers

use chrono::{DateTime, Local};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

use crate::core::{MetricsRecord, Status};
use crate::utils::{format_timestamp, truncate_string};

const SERVICE_WIDTH: usize = 20;
const RULE_WIDTH: usize = 90;

fn colored_status(status: Status) -> ColoredString {
    // Pad before coloring so escape codes don't break alignment
    let label = format!("{:>8}", status.as_str());
    match status {
        Status::High => label.as_str().red(),
        Status::Normal => label.as_str().yellow(),
        Status::Low => label.as_str().green(),
    }
}

pub fn render(
    records: &[MetricsRecord],
    generated_at: &DateTime<Local>,
    out: &mut dyn Write,
) -> io::Result<()> {
    writeln!(out, "{}", "\n=== RESOURCE USAGE REPORT ===\n".cyan())?;

    writeln!(
        out,
        "{:<20} {:>8} {:>12} {:>12} {:>12} {:>12} {:>8}",
        "SERVICE", "CPU%", "MEM USED", "MEM TOTAL", "NET RX", "NET TX", "STATUS"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    if records.is_empty() {
        writeln!(out, "No matching services found.")?;
    }

    for m in records {
        writeln!(
            out,
            "{:<20} {:>7.1}% {:>10.1}MB {:>10.1}MB {:>12.1} {:>12.1} {}",
            truncate_string(&m.service, SERVICE_WIDTH),
            m.cpu_percent,
            m.memory_used,
            m.memory_total,
            m.network_rx,
            m.network_tx,
            colored_status(m.status),
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Report generated at: {}", format_timestamp(generated_at))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(service: &str, cpu: f64, status: Status) -> MetricsRecord {
        MetricsRecord {
            service: service.to_string(),
            cpu_percent: cpu,
            memory_used: 512.0,
            memory_total: 1024.0,
            network_rx: 0.0,
            network_tx: 0.0,
            status,
        }
    }

    fn render_plain(records: &[MetricsRecord]) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        render(records, &Local::now(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_report_rows() {
        let text = render_plain(&[
            record("web-1", 85.12, Status::High),
            record("a-very-long-service-name-indeed", 3.0, Status::Low),
        ]);

        assert!(text.contains("=== RESOURCE USAGE REPORT ==="));
        assert!(text.contains("SERVICE"));
        assert!(text.contains("web-1"));
        assert!(text.contains("85.1%"));
        assert!(text.contains("512.0MB"));
        assert!(text.contains("HIGH"));
        assert!(text.contains("a-very-long-servi..."));
        assert!(text.contains("Report generated at: "));
    }

    #[test]
    fn test_text_report_empty() {
        let text = render_plain(&[]);
        assert!(text.contains("No matching services found."));
    }
}
