/// End-to-end metrics collection
///
/// fetch -> split -> parse -> filter, all in one pass over a single
/// snapshot. Never fails: an unavailable source simply yields no records.

use tracing::{debug, info};

use crate::core::classifier::classify_and_filter;
use crate::core::metrics::MetricsRecord;
use crate::core::parser::{parse_fields, split_fields};
use crate::core::stats_source::{RawStats, StatsSource};

/// Result of one collection run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    pub records: Vec<MetricsRecord>,
    /// False when the stats source could not be queried
    pub source_available: bool,
}

/// Turn raw stats lines into filtered records, preserving line order
pub fn records_from_lines<L, S>(lines: &[L], filters: &[S]) -> Vec<MetricsRecord>
where
    L: AsRef<str>,
    S: AsRef<str>,
{
    let parsed: Vec<MetricsRecord> = lines
        .iter()
        .filter_map(|line| {
            let line = line.as_ref();
            let fields = split_fields(line);
            if fields.is_none() && !line.trim().is_empty() {
                debug!("Skipping malformed stats line: {:?}", line);
            }
            fields
        })
        .map(parse_fields)
        .collect();

    let total = parsed.len();
    let records = classify_and_filter(parsed, filters);
    debug!("{} of {} services matched filters", records.len(), total);

    records
}

/// Collect one snapshot from `source`
pub fn collect_metrics<S: AsRef<str>>(source: &dyn StatsSource, filters: &[S]) -> Collection {
    let RawStats { lines, available } = source.fetch_raw_stats();

    if !available {
        return Collection {
            records: Vec::new(),
            source_available: false,
        };
    }

    let records = records_from_lines(&lines, filters);
    info!("Collected metrics for {} services", records.len());

    Collection {
        records,
        source_available: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metrics::Status;
    use crate::core::stats_source::MockStatsSource;

    const SAMPLE: &str = "\
web-1|85.10%|300MiB / 1GiB|1.2kB / 648B
web-2|51.00%|200MiB / 1GiB|2kB / 1kB
cache-1|0.30%|20MiB / 512MiB|500B / 0B
";

    fn source_with(output: &'static str) -> MockStatsSource {
        let mut source = MockStatsSource::new();
        source
            .expect_fetch_raw_stats()
            .times(1)
            .returning(move || RawStats::from_output(output));
        source
    }

    #[test]
    fn test_collect_all_services() {
        let source = source_with(SAMPLE);
        let no_filters: [&str; 0] = [];

        let collection = collect_metrics(&source, &no_filters);

        assert!(collection.source_available);
        let statuses: Vec<Status> = collection.records.iter().map(|r| r.status).collect();
        assert_eq!(statuses, vec![Status::High, Status::Normal, Status::Low]);
    }

    #[test]
    fn test_collect_with_filter() {
        let source = source_with(SAMPLE);

        let collection = collect_metrics(&source, &["web"]);
        let names: Vec<&str> = collection.records.iter().map(|r| r.service.as_str()).collect();
        assert_eq!(names, vec!["web-1", "web-2"]);
    }

    #[test]
    fn test_unavailable_source_yields_empty() {
        let mut source = MockStatsSource::new();
        source
            .expect_fetch_raw_stats()
            .times(1)
            .returning(RawStats::unavailable);

        let collection = collect_metrics(&source, &["web"]);
        assert!(!collection.source_available);
        assert!(collection.records.is_empty());
    }

    #[test]
    fn test_short_and_blank_lines_skipped() {
        let lines = vec![
            "WARNING: No swap limit support",
            "",
            "db|70%|1MiB / 2MiB|3B / 4B",
            "half|1%",
            "   ",
        ];
        let no_filters: [&str; 0] = [];

        let records = records_from_lines(&lines, &no_filters);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].service, "db");
    }

    #[test]
    fn test_available_but_empty_output() {
        let source = source_with("");
        let no_filters: [&str; 0] = [];

        let collection = collect_metrics(&source, &no_filters);
        assert!(collection.source_available);
        assert!(collection.records.is_empty());
    }
}
