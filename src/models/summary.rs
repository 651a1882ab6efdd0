//! k6 summary document and typed metric access
//!
//! The summary is a JSON object whose optional `metrics` key maps metric
//! names to records of field values. Two record layouts are understood:
//!
//! - `--summary-export`: `{"http_reqs": {"count": 12345, "rate": 1234.5}}`
//! - `handleSummary`: `{"http_reqs": {"type": "counter", "values": {"count": 12345}}}`
//!
//! Lookups never fail. Absent metrics, absent fields and JSON `null` all
//! resolve to [`MetricLookup::Missing`]; the caller picks the default.

use crate::error::{AppError, Result};
use crate::types::field_names;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Loaded k6 summary, read-only once constructed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsDocument {
    #[serde(default)]
    metrics: Option<Map<String, Value>>,
}

/// Result of looking a field up in the document
#[derive(Debug, Clone, PartialEq)]
pub enum MetricLookup<T> {
    /// Field present with the requested type
    Found(T),
    /// Metric or field absent, or explicitly null
    Missing,
    /// Field present but not convertible; carries the JSON type name
    Mismatched(&'static str),
}

/// Types that can be read out of a metric field
pub trait MetricValue: Sized {
    /// Convert a non-null JSON value, or `None` if the type does not fit
    fn from_json(value: &Value) -> Option<Self>;
}

impl MetricValue for f64 {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl MetricValue for u64 {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_u64().or_else(|| {
            value.as_f64()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map(|v| v.round() as u64)
        })
    }
}

impl MetricValue for u32 {
    fn from_json(value: &Value) -> Option<Self> {
        u64::from_json(value).and_then(|v| u32::try_from(v).ok())
    }
}

impl MetricsDocument {
    /// Load and parse a summary file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| AppError::io(format!("Failed to read summary file {}: {}", path.display(), e)))?;
        let value: Value = serde_json::from_str(&text)
            .map_err(|e| AppError::parse(format!("Failed to load summary file {}: {}", path.display(), e)))?;
        Self::from_value(value)
    }

    /// Parse a summary from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Build a document from an already parsed JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(AppError::parse(format!(
                "summary root must be a JSON object, found {}",
                json_type_name(&value)
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Names of all metrics present in the document
    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        self.metrics.iter().flat_map(|m| m.keys().map(String::as_str))
    }

    pub fn metric_count(&self) -> usize {
        self.metrics.as_ref().map_or(0, Map::len)
    }

    /// Look a field up, distinguishing missing from mistyped values
    pub fn lookup<T: MetricValue>(&self, metric: &str, field: &str) -> MetricLookup<T> {
        match self.raw_field(metric, field) {
            None => MetricLookup::Missing,
            Some(value) => match T::from_json(value) {
                Some(converted) => MetricLookup::Found(converted),
                None => MetricLookup::Mismatched(json_type_name(value)),
            },
        }
    }

    fn record(&self, metric: &str) -> Option<&Map<String, Value>> {
        self.metrics.as_ref()?.get(metric)?.as_object()
    }

    fn raw_field(&self, metric: &str, field: &str) -> Option<&Value> {
        let record = self.record(metric)?;
        record.get(field)
            .filter(|v| !v.is_null())
            .or_else(|| {
                record.get(field_names::VALUES)?
                    .as_object()?
                    .get(field)
                    .filter(|v| !v.is_null())
            })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn doc(value: Value) -> MetricsDocument {
        MetricsDocument::from_value(value).unwrap()
    }

    #[test]
    fn test_lookup_present_values() {
        let document = doc(json!({
            "metrics": {
                "http_reqs": {"count": 12345, "rate": 1234.5},
                "http_req_failed": {"rate": 0.0123, "passes": 12, "fails": 12333},
                "http_req_duration": {"p(95)": 87.654, "avg": 40.1}
            }
        }));

        assert_eq!(document.lookup::<u64>("http_reqs", "count"), MetricLookup::Found(12345));
        assert_eq!(document.lookup::<f64>("http_req_failed", "rate"), MetricLookup::Found(0.0123));
        assert_eq!(document.lookup::<f64>("http_req_duration", "p(95)"), MetricLookup::Found(87.654));
    }

    #[test]
    fn test_lookup_missing_metric_and_field() {
        let document = doc(json!({"metrics": {"http_reqs": {"rate": 10.0}}}));

        assert_eq!(document.lookup::<u64>("order_ok", "count"), MetricLookup::Missing);
        assert_eq!(document.lookup::<u64>("http_reqs", "count"), MetricLookup::Missing);
        assert_eq!(document.lookup::<f64>("http_reqs", "rate"), MetricLookup::Found(10.0));
    }

    #[test]
    fn test_lookup_null_markers() {
        let document = doc(json!({"metrics": {"order_ok": null, "order_busy": {"count": null}}}));

        assert_eq!(document.lookup::<u64>("order_ok", "count"), MetricLookup::Missing);
        assert_eq!(document.lookup::<u64>("order_busy", "count"), MetricLookup::Missing);
    }

    #[test]
    fn test_missing_metrics_key() {
        let document = doc(json!({"root_group": {}}));
        assert_eq!(document.metric_count(), 0);
        assert_eq!(document.lookup::<u64>("http_reqs", "count"), MetricLookup::Missing);

        let document = doc(json!({"metrics": null}));
        assert_eq!(document.metric_count(), 0);
    }

    #[test]
    fn test_mismatched_type_is_reported() {
        let document = doc(json!({"metrics": {"http_reqs": {"count": "lots"}}}));

        assert_eq!(document.lookup::<u64>("http_reqs", "count"), MetricLookup::Mismatched("string"));
        assert_eq!(document.lookup::<f64>("http_reqs", "count"), MetricLookup::Mismatched("string"));
    }

    #[test]
    fn test_non_object_record_is_missing() {
        let document = doc(json!({"metrics": {"http_reqs": 5}}));
        assert_eq!(document.lookup::<u64>("http_reqs", "count"), MetricLookup::Missing);
    }

    #[test]
    fn test_handle_summary_values_layout() {
        let document = doc(json!({
            "metrics": {
                "http_reqs": {"type": "counter", "contains": "default", "values": {"count": 42, "rate": 4.2}},
                "http_req_duration": {
                    "type": "trend",
                    "contains": "time",
                    "values": {"p(95)": 12.5},
                    "thresholds": {"p(95)<2000": {"ok": true}}
                }
            }
        }));

        assert_eq!(document.lookup::<u64>("http_reqs", "count"), MetricLookup::Found(42));
        assert_eq!(document.lookup::<f64>("http_req_duration", "p(95)"), MetricLookup::Found(12.5));
    }

    #[test]
    fn test_float_counts_are_rounded() {
        let document = doc(json!({"metrics": {"order_ok": {"count": 899.6}, "order_busy": {"count": -1.0}}}));
        assert_eq!(document.lookup::<u64>("order_ok", "count"), MetricLookup::Found(900));
        assert_eq!(document.lookup::<u64>("order_busy", "count"), MetricLookup::Mismatched("number"));
    }

    #[test]
    fn test_integer_reads_as_float() {
        let document = doc(json!({"metrics": {"http_req_duration": {"p(95)": 88}}}));
        assert_eq!(document.lookup::<f64>("http_req_duration", "p(95)"), MetricLookup::Found(88.0));
    }

    #[test]
    fn test_root_must_be_object() {
        let error = MetricsDocument::from_json_str("[1, 2, 3]").unwrap_err();
        assert_eq!(error.category(), "PARSE");
        assert!(error.to_string().contains("array"));

        let error = MetricsDocument::from_json_str("{\"metrics\": 5}").unwrap_err();
        assert_eq!(error.category(), "PARSE");
    }

    #[test]
    fn test_invalid_json() {
        let error = MetricsDocument::from_json_str("{not json").unwrap_err();
        assert_eq!(error.category(), "PARSE");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", json!({"metrics": {"order_sold_out": {"count": 80}}})).unwrap();

        let document = MetricsDocument::load(file.path()).unwrap();
        assert_eq!(document.lookup::<u64>("order_sold_out", "count"), MetricLookup::Found(80));
        assert_eq!(document.metric_names().collect::<Vec<_>>(), vec!["order_sold_out"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let error = MetricsDocument::load(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(error.category(), "IO");
        assert!(error.to_string().contains("absent.json"));
    }

    #[test]
    fn test_load_unparsable_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "running (10.0s), 0000/1000 VUs").unwrap();

        let error = MetricsDocument::load(file.path()).unwrap_err();
        assert_eq!(error.category(), "PARSE");
        assert!(error.to_string().contains("Failed to load summary file"));
        assert_eq!(error.to_string().matches("Parsing error").count(), 1);
        assert!(!error.to_string().contains("JSON parse error"));
    }
}
