/// Error types for the stats pipeline
///
/// Both kinds are recovered inside the pipeline: a failed source yields an
/// empty record set and a failed field falls back to 0.0.

use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsSourceError {
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {}: {stderr}", describe_exit(.code))]
    ExitStatus {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {}", c),
        None => "signal".to_string(),
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum FieldParseError {
    #[error("no {field} value found in '{input}'")]
    NoMatch { field: &'static str, input: String },

    #[error("invalid {field} number in '{input}': {source}")]
    InvalidNumber {
        field: &'static str,
        input: String,
        #[source]
        source: ParseFloatError,
    },
}
