/// Per-service resource metrics
///
/// One `MetricsRecord` is produced for every container line that survives
/// parsing and filtering. Records are built once and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse CPU load tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    High,
    Normal,
    Low,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::High => "HIGH",
            Status::Normal => "NORMAL",
            Status::Low => "LOW",
        }
    }

    /// CSS class used by the HTML report
    pub fn css_class(&self) -> &'static str {
        match self {
            Status::High => "high",
            Status::Normal => "normal",
            Status::Low => "low",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource usage of a single service at report time
///
/// Memory and network values keep whatever unit the stats source printed
/// (typically MiB for memory). Nothing is converted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    #[serde(rename = "Service")]
    pub service: String,

    #[serde(rename = "CPUPercent")]
    pub cpu_percent: f64,

    #[serde(rename = "MemoryUsed")]
    pub memory_used: f64,

    #[serde(rename = "MemoryTotal")]
    pub memory_total: f64,

    #[serde(rename = "NetworkRX")]
    pub network_rx: f64,

    #[serde(rename = "NetworkTX")]
    pub network_tx: f64,

    #[serde(rename = "Status")]
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(Status::High.to_string(), "HIGH");
        assert_eq!(Status::Normal.as_str(), "NORMAL");
        assert_eq!(Status::Low.css_class(), "low");
    }

    #[test]
    fn test_record_json_keys() {
        let record = MetricsRecord {
            service: "web-1".to_string(),
            cpu_percent: 12.5,
            memory_used: 512.0,
            memory_total: 1024.0,
            network_rx: 1.5,
            network_tx: 2.0,
            status: Status::Low,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["Service"], "web-1");
        assert_eq!(value["CPUPercent"], 12.5);
        assert_eq!(value["MemoryTotal"], 1024.0);
        assert_eq!(value["NetworkRX"], 1.5);
        assert_eq!(value["Status"], "LOW");
        assert!(value.get("DiskUsed").is_none());
    }
}
