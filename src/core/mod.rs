pub mod stats_source;
pub mod parser;
pub mod classifier;
pub mod metrics;
pub mod collector;
pub mod error;

pub use stats_source::{DockerStatsSource, RawStats, StatsSource};
pub use parser::{parse_line, split_fields};
pub use classifier::{classify, classify_and_filter};
pub use metrics::{MetricsRecord, Status};
pub use collector::{collect_metrics, Collection};
pub use error::{FieldParseError, StatsSourceError};
