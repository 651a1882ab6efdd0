//! Load Test Report Generator
//!
//! Reads a k6 summary export and renders a fixed-format Markdown status
//! report describing the flash-sale load test: request totals, failure rate,
//! p95 latency and the business-outcome counters recorded by the test script.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{Config, MetricsDocument, ReportOutput, ReportValues, ScenarioInfo};
pub use report::ReportGenerator;
pub use output::{ReportFormatter, MarkdownFormatter, ConsoleSummary};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Default configuration values
pub mod defaults {
    pub const DEFAULT_SUMMARY_PATH: &str = "loadtest/results/k6_summary.json";
    pub const DEFAULT_REPORT_PATH: &str = "loadtest/results/README_SNIPPET.md";

    pub const DEFAULT_VUS: u32 = 1000;
    pub const DEFAULT_DURATION: &str = "10s";
    pub const DEFAULT_ENDPOINT: &str = "POST /orders";
    pub const DEFAULT_ROUTE: &str = "透過 Ingress → Gateway → order-service";
    pub const DEFAULT_TOOL: &str = "k6（Docker 執行）";
    pub const DEFAULT_EXECUTOR: &str = "constant-vus";

    pub const DEFAULT_STRICT_METRICS: bool = false;
    pub const DEFAULT_ENABLE_COLOR: bool = true;
}
