/// Stats source adapter
///
/// Runs the container runtime's one-shot stats command and hands back raw
/// lines. Parsing lives in `parser.rs` so it can be tested on captured
/// output without spawning anything.

use std::process::{Command, Stdio};
use tracing::{debug, warn};

use crate::core::error::StatsSourceError;

/// Default container CLI
pub const DEFAULT_DOCKER_BIN: &str = "docker";

/// Go template requested from `docker stats`, one container per line
pub const STATS_FORMAT: &str = "{{.Container}}|{{.CPUPerc}}|{{.MemUsage}}|{{.NetIO}}";

/// Raw output of one stats invocation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawStats {
    pub lines: Vec<String>,
    pub available: bool,
}

impl RawStats {
    /// Source could not be queried, nothing to parse
    pub fn unavailable() -> Self {
        Self {
            lines: Vec::new(),
            available: false,
        }
    }

    pub fn from_output(output: &str) -> Self {
        Self {
            lines: output.lines().map(str::to_string).collect(),
            available: true,
        }
    }
}

/// Anything that can produce one snapshot of raw stats lines
#[cfg_attr(test, mockall::automock)]
pub trait StatsSource {
    fn fetch_raw_stats(&self) -> RawStats;
}

/// `docker stats --no-stream` backed source
#[derive(Debug, Clone)]
pub struct DockerStatsSource {
    program: String,
}

impl DockerStatsSource {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the stats command once and return its stdout
    pub fn try_fetch(&self) -> Result<String, StatsSourceError> {
        debug!("Running {} stats --no-stream", self.program);

        let output = Command::new(&self.program)
            .args(["stats", "--no-stream", "--format", STATS_FORMAT])
            .stdin(Stdio::null())
            .output()
            .map_err(|source| StatsSourceError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            return Err(StatsSourceError::ExitStatus {
                program: self.program.clone(),
                code: output.status.code(),
                stderr,
            });
        }

        if !stderr.is_empty() {
            debug!("{} stats stderr: {}", self.program, stderr);
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for DockerStatsSource {
    fn default() -> Self {
        Self::new(DEFAULT_DOCKER_BIN)
    }
}

impl StatsSource for DockerStatsSource {
    fn fetch_raw_stats(&self) -> RawStats {
        match self.try_fetch() {
            Ok(output) => RawStats::from_output(&output),
            Err(e) => {
                warn!("Could not get Docker stats: {}", e);
                RawStats::unavailable()
            }
        }
    }
}
