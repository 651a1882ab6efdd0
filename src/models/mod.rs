//! Data models and structures for the report generator

pub mod config;
pub mod report;
pub mod summary;

// Re-export main model types
pub use config::Config;
pub use report::{OutcomeCounts, ReportOutput, ReportValues, ScenarioInfo};
pub use summary::{MetricLookup, MetricValue, MetricsDocument};
