//! Report data models: extracted values, scenario description and output text

use crate::types::OutcomeClass;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Business-outcome counters, one per HTTP status class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    /// Orders placed (200)
    pub ok: u64,
    /// Sold out / insufficient stock (409)
    pub sold_out: u64,
    /// Busy, retry later (429)
    pub busy: u64,
    /// Any other status
    pub other_fail: u64,
}

impl OutcomeCounts {
    /// Count recorded for an outcome class
    pub fn get(&self, class: OutcomeClass) -> u64 {
        match class {
            OutcomeClass::Ok => self.ok,
            OutcomeClass::SoldOut => self.sold_out,
            OutcomeClass::Busy => self.busy,
            OutcomeClass::Other => self.other_fail,
        }
    }

    /// Mutable access to the count for an outcome class
    pub fn get_mut(&mut self, class: OutcomeClass) -> &mut u64 {
        match class {
            OutcomeClass::Ok => &mut self.ok,
            OutcomeClass::SoldOut => &mut self.sold_out,
            OutcomeClass::Busy => &mut self.busy,
            OutcomeClass::Other => &mut self.other_fail,
        }
    }

    /// Sum of all outcome counters
    pub fn total(&self) -> u64 {
        OutcomeClass::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

/// Values extracted from the summary for rendering
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportValues {
    /// Total HTTP requests (`http_reqs.count`)
    pub request_count: u64,
    /// Network/script failure rate (`http_req_failed.rate`), 0.0..=1.0
    pub failure_rate: f64,
    /// p95 request duration in milliseconds; `None` only in strict mode
    pub p95_ms: Option<f64>,
    /// Business-outcome counters
    pub outcomes: OutcomeCounts,
}

impl ReportValues {
    /// Whether successful orders exceed the given stock
    pub fn is_oversold(&self, stock: u64) -> bool {
        self.outcomes.ok > stock
    }
}

/// Descriptive header data for the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInfo {
    pub tool: String,
    pub endpoint: String,
    pub route: String,
    pub executor: String,
    pub vus: u32,
    pub duration: String,
    pub stock: Option<u64>,
}

impl Default for ScenarioInfo {
    fn default() -> Self {
        use crate::defaults::*;

        Self {
            tool: DEFAULT_TOOL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            route: DEFAULT_ROUTE.to_string(),
            executor: DEFAULT_EXECUTOR.to_string(),
            vus: DEFAULT_VUS,
            duration: DEFAULT_DURATION.to_string(),
            stock: None,
        }
    }
}

/// Rendered report text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutput {
    text: String,
}

impl ReportOutput {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

}

impl fmt::Display for ReportOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
