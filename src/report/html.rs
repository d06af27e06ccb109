/// Standalone HTML report

use chrono::{DateTime, Local};
use std::io::{self, Write};

use crate::core::MetricsRecord;
use crate::utils::{escape_html, format_timestamp};

const STYLE: &str = r#"        body { font-family: Arial, sans-serif; margin: 20px; }
        table { border-collapse: collapse; width: 100%; }
        th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
        th { background-color: #4CAF50; color: white; }
        tr:nth-child(even) { background-color: #f2f2f2; }
        .high { color: red; }
        .normal { color: orange; }
        .low { color: green; }
"#;

pub fn render(
    records: &[MetricsRecord],
    generated_at: &DateTime<Local>,
    out: &mut dyn Write,
) -> io::Result<()> {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("    <meta charset=\"utf-8\">\n");
    html.push_str("    <title>Resource Usage Report</title>\n");
    html.push_str("    <style>\n");
    html.push_str(STYLE);
    html.push_str("    </style>\n</head>\n<body>\n");
    html.push_str("    <h1>Resource Usage Report</h1>\n");
    html.push_str(&format!(
        "    <p>Generated: {}</p>\n",
        format_timestamp(generated_at)
    ));

    html.push_str(
        r#"    <table>
        <tr>
            <th>Service</th>
            <th>CPU%</th>
            <th>MEM Used</th>
            <th>MEM Total</th>
            <th>NET RX</th>
            <th>NET TX</th>
            <th>Status</th>
        </tr>
"#,
    );

    for m in records {
        html.push_str(&format!(
            r#"        <tr>
            <td>{}</td>
            <td>{:.1}%</td>
            <td>{:.1}MB</td>
            <td>{:.1}MB</td>
            <td>{:.1}</td>
            <td>{:.1}</td>
            <td class="{}">{}</td>
        </tr>
"#,
            escape_html(&m.service),
            m.cpu_percent,
            m.memory_used,
            m.memory_total,
            m.network_rx,
            m.network_tx,
            m.status.css_class(),
            m.status,
        ));
    }

    html.push_str("    </table>\n</body>\n</html>\n");

    out.write_all(html.as_bytes())
}
