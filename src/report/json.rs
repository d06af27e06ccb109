/// JSON report: the full record set as a pretty-printed array

use std::io::{self, Write};

use crate::core::MetricsRecord;

pub fn render(records: &[MetricsRecord], out: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)
}
