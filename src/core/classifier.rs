/// Load classification and service-name filtering

use crate::core::metrics::{MetricsRecord, Status};

/// Above this CPU percentage a service is HIGH
pub const HIGH_CPU_THRESHOLD: f64 = 80.0;

/// Above this CPU percentage (and up to the high threshold) a service is NORMAL
pub const NORMAL_CPU_THRESHOLD: f64 = 50.0;

/// Classify a single CPU sample
pub fn classify(cpu_percent: f64) -> Status {
    if cpu_percent > HIGH_CPU_THRESHOLD {
        Status::High
    } else if cpu_percent > NORMAL_CPU_THRESHOLD {
        Status::Normal
    } else {
        Status::Low
    }
}

/// An empty filter list matches every service; otherwise any case-sensitive
/// substring hit is enough.
pub fn matches_filter<S: AsRef<str>>(service: &str, filters: &[S]) -> bool {
    filters.is_empty() || filters.iter().any(|f| service.contains(f.as_ref()))
}

/// Keep records whose service matches the filters, in input order
///
/// Status is stamped by [`classify`] when the record is parsed, so this only
/// has to drop the non-matching records.
pub fn classify_and_filter<S: AsRef<str>>(
    records: Vec<MetricsRecord>,
    filters: &[S],
) -> Vec<MetricsRecord> {
    records
        .into_iter()
        .filter(|record| matches_filter(&record.service, filters))
        .collect()
}
