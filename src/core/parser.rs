/// Parsing of `docker stats` lines
///
/// Each line carries four `|`-separated fields:
/// `container|cpu%|mem used / mem limit|net rx / net tx`
///
/// A numeric sub-field that cannot be read falls back to 0.0 through
/// [`or_default`]; the rest of the line is still parsed.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use crate::core::classifier::classify;
use crate::core::error::FieldParseError;
use crate::core::metrics::MetricsRecord;

/// Field delimiter requested from the stats command
pub const FIELD_DELIMITER: char = '|';

/// Number of fields in a well-formed line
pub const FIELD_COUNT: usize = 4;

fn cpu_regex() -> &'static Regex {
    static CPU_RE: OnceLock<Regex> = OnceLock::new();
    CPU_RE.get_or_init(|| Regex::new(r"(\d+(?:\.\d+)?)%").unwrap())
}

/// "<number><unit> / <number><unit>", units ignored
fn pair_regex() -> &'static Regex {
    static PAIR_RE: OnceLock<Regex> = OnceLock::new();
    PAIR_RE.get_or_init(|| {
        Regex::new(r"(\d+(?:\.\d+)?)\s*[^/\d]*/\s*(\d+(?:\.\d+)?)").unwrap()
    })
}

/// Split a raw line into its four fields
///
/// Returns `None` for lines the pipeline should skip: blank lines, lines
/// with fewer than four fields and lines without a container identifier.
/// Fields past the fourth are ignored.
pub fn split_fields(raw: &str) -> Option<[&str; FIELD_COUNT]> {
    if raw.trim().is_empty() {
        return None;
    }

    let mut parts = raw.split(FIELD_DELIMITER);
    let fields = [parts.next()?, parts.next()?, parts.next()?, parts.next()?];

    if fields[0].is_empty() {
        return None;
    }

    Some(fields)
}

/// Extract the first percentage from a CPU field (e.g. "12.5%")
pub fn parse_cpu_percent(field: &str) -> Result<f64, FieldParseError> {
    let caps = cpu_regex().captures(field).ok_or_else(|| FieldParseError::NoMatch {
        field: "cpu",
        input: field.to_string(),
    })?;

    parse_number("cpu", &caps[1])
}

/// Extract a "used / total" style pair (memory usage, network I/O)
pub fn parse_usage_pair(
    field_name: &'static str,
    field: &str,
) -> Result<(f64, f64), FieldParseError> {
    let caps = pair_regex().captures(field).ok_or_else(|| FieldParseError::NoMatch {
        field: field_name,
        input: field.to_string(),
    })?;

    Ok((parse_number(field_name, &caps[1])?, parse_number(field_name, &caps[2])?))
}

fn parse_number(field: &'static str, text: &str) -> Result<f64, FieldParseError> {
    text.parse::<f64>()
        .map_err(|source| FieldParseError::InvalidNumber {
            field,
            input: text.to_string(),
            source,
        })
}

/// Use the parsed value, or the type's default when parsing failed
pub fn or_default<T: Default>(result: Result<T, FieldParseError>) -> T {
    result.unwrap_or_else(|e| {
        debug!("Defaulting field: {}", e);
        T::default()
    })
}

/// Build a record from already split fields
pub fn parse_fields(fields: [&str; FIELD_COUNT]) -> MetricsRecord {
    let [service, cpu, memory, network] = fields;

    let cpu_percent = or_default(parse_cpu_percent(cpu));
    let (memory_used, memory_total) = or_default(parse_usage_pair("memory", memory));
    let (network_rx, network_tx) = or_default(parse_usage_pair("network", network));

    MetricsRecord {
        service: service.to_string(),
        cpu_percent,
        memory_used,
        memory_total,
        network_rx,
        network_tx,
        status: classify(cpu_percent),
    }
}

/// Parse one raw stats line
///
/// Expects a well-formed line (see [`split_fields`]). Missing trailing
/// fields are read as empty and default to 0.0 instead of panicking.
pub fn parse_line(raw: &str) -> MetricsRecord {
    let mut parts = raw.split(FIELD_DELIMITER);
    let mut next = || parts.next().unwrap_or("");
    parse_fields([next(), next(), next(), next()])
}
