//! Type definitions for the metrics consumed by the report

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// k6 metric names read by the report
pub mod metric_names {
    pub const HTTP_REQS: &str = "http_reqs";
    pub const HTTP_REQ_FAILED: &str = "http_req_failed";
    pub const HTTP_REQ_DURATION: &str = "http_req_duration";
    pub const HTTP_REQ_DURATION_EXPECTED: &str = "http_req_duration{expected_response:true}";
    pub const VUS_MAX: &str = "vus_max";

    pub const ORDER_OK: &str = "order_ok";
    pub const ORDER_SOLD_OUT: &str = "order_sold_out";
    pub const ORDER_BUSY: &str = "order_busy";
    pub const ORDER_OTHER_FAIL: &str = "order_other_fail";
}

/// Field names within a metric record
pub mod field_names {
    pub const COUNT: &str = "count";
    pub const RATE: &str = "rate";
    pub const VALUE: &str = "value";
    pub const MAX: &str = "max";
    pub const P95: &str = "p(95)";

    /// Nested object used by k6 `handleSummary` output
    pub const VALUES: &str = "values";
}

/// Classification of an order response, one per business-outcome counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeClass {
    /// Order placed (HTTP 200)
    Ok,
    /// Stock exhausted (HTTP 409)
    SoldOut,
    /// Lock contention, retry later (HTTP 429)
    Busy,
    /// Any other status
    Other,
}

impl OutcomeClass {
    /// All outcome classes in report order
    pub const ALL: [OutcomeClass; 4] = [Self::Ok, Self::SoldOut, Self::Busy, Self::Other];

    /// k6 counter backing this outcome
    pub fn counter_name(&self) -> &'static str {
        match self {
            Self::Ok => metric_names::ORDER_OK,
            Self::SoldOut => metric_names::ORDER_SOLD_OUT,
            Self::Busy => metric_names::ORDER_BUSY,
            Self::Other => metric_names::ORDER_OTHER_FAIL,
        }
    }

    /// HTTP status the outcome corresponds to, if it has a single one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Ok => Some(200),
            Self::SoldOut => Some(409),
            Self::Busy => Some(429),
            Self::Other => None,
        }
    }

    /// Whether this outcome is expected under contention
    pub fn is_expected(&self) -> bool {
        !matches!(self, Self::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_counter_names() {
        assert_eq!(OutcomeClass::Ok.counter_name(), "order_ok");
        assert_eq!(OutcomeClass::SoldOut.counter_name(), "order_sold_out");
        assert_eq!(OutcomeClass::Busy.counter_name(), "order_busy");
        assert_eq!(OutcomeClass::Other.counter_name(), "order_other_fail");
    }

    #[test]
    fn test_outcome_status_codes() {
        assert_eq!(OutcomeClass::Ok.status_code(), Some(200));
        assert_eq!(OutcomeClass::SoldOut.status_code(), Some(409));
        assert_eq!(OutcomeClass::Busy.status_code(), Some(429));
        assert_eq!(OutcomeClass::Other.status_code(), None);
    }

    #[test]
    fn test_only_other_is_unexpected() {
        let unexpected: Vec<_> = OutcomeClass::ALL.iter().filter(|c| !c.is_expected()).collect();
        assert_eq!(unexpected, vec![&OutcomeClass::Other]);
    }
}
