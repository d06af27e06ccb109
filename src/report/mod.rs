/// Report rendering
///
/// Renderers take the finished record set and write a complete document.
/// They do no parsing or classification of their own.

pub mod html;
pub mod json;
pub mod text;

use chrono::{DateTime, Local};
use std::io::{self, Write};

use crate::core::MetricsRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Html,
}

/// Write `records` in the requested format
pub fn render(
    format: ReportFormat,
    records: &[MetricsRecord],
    generated_at: &DateTime<Local>,
    out: &mut dyn Write,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => text::render(records, generated_at, out),
        ReportFormat::Json => json::render(records, out),
        ReportFormat::Html => html::render(records, generated_at, out),
    }
}
