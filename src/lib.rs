//! Point-in-time container resource usage reports.
//!
//! [`core`] queries the stats source and turns its output into classified
//! [`core::MetricsRecord`]s; [`report`] renders them as text, JSON or HTML.

pub mod core;
pub mod report;
pub mod utils;
