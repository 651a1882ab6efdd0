//! Configuration data model and validation

use crate::types::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// k6 summary export to read
    #[serde(default = "default_summary_path")]
    pub summary_path: PathBuf,

    /// Markdown report to write
    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,

    /// VU count shown in the header; read from the summary when unset
    #[serde(default)]
    pub vus: Option<u32>,

    /// k6 duration string shown in the header
    #[serde(default = "default_duration")]
    pub duration: String,

    /// Endpoint under test shown in the header
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Available stock, used for the verification line and oversell check
    #[serde(default)]
    pub stock: Option<u64>,

    /// Fail rendering when p95 is missing instead of defaulting to 0
    #[serde(default = "default_strict_metrics")]
    pub strict_metrics: bool,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            summary_path: default_summary_path(),
            report_path: default_report_path(),
            vus: None,
            duration: default_duration(),
            endpoint: default_endpoint(),
            stock: None,
            strict_metrics: default_strict_metrics(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.summary_path.as_os_str().is_empty() {
            return Err(AppError::config("Summary path cannot be empty"));
        }

        if self.report_path.as_os_str().is_empty() {
            return Err(AppError::config("Report path cannot be empty"));
        }

        if self.summary_path == self.report_path {
            return Err(AppError::config(format!(
                "Report path would overwrite the summary file: {}",
                self.report_path.display()
            )));
        }

        if self.vus == Some(0) {
            return Err(AppError::config("VU count must be greater than 0"));
        }

        if self.endpoint.trim().is_empty() {
            return Err(AppError::config("Endpoint cannot be empty"));
        }

        Ok(())
    }

    /// Merge configuration values from key/value pairs
    pub fn merge_from_vars<I, K, V>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in vars {
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }

            match key.as_ref() {
                "LOADTEST_SUMMARY" => self.summary_path = PathBuf::from(value),
                "LOADTEST_REPORT" => self.report_path = PathBuf::from(value),
                "VU_COUNT" => {
                    self.vus = Some(value.parse()
                        .map_err(|e| AppError::config(format!("Invalid VU_COUNT value '{}': {}", value, e)))?);
                }
                "DURATION" => self.duration = value.to_string(),
                "TARGET_ENDPOINT" => self.endpoint = value.to_string(),
                "STOCK" => {
                    self.stock = Some(value.parse()
                        .map_err(|e| AppError::config(format!("Invalid STOCK value '{}': {}", value, e)))?);
                }
                "STRICT_METRICS" => self.strict_metrics = parse_flag("STRICT_METRICS", value)?,
                "ENABLE_COLOR" => self.enable_color = parse_flag("ENABLE_COLOR", value)?,
                _ => {}
            }
        }

        Ok(())
    }
}

/// Parse a boolean environment flag (`true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`)
fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(AppError::config(format!(
            "Invalid {} value '{}': expected true/false, 1/0, yes/no or on/off",
            key, value
        ))),
    }
}

// Default value functions for serde
fn default_summary_path() -> PathBuf {
    PathBuf::from(crate::defaults::DEFAULT_SUMMARY_PATH)
}

fn default_report_path() -> PathBuf {
    PathBuf::from(crate::defaults::DEFAULT_REPORT_PATH)
}

fn default_duration() -> String {
    crate::defaults::DEFAULT_DURATION.to_string()
}

fn default_endpoint() -> String {
    crate::defaults::DEFAULT_ENDPOINT.to_string()
}

fn default_strict_metrics() -> bool {
    crate::defaults::DEFAULT_STRICT_METRICS
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.summary_path, PathBuf::from("loadtest/results/k6_summary.json"));
        assert_eq!(config.report_path, PathBuf::from("loadtest/results/README_SNIPPET.md"));
        assert!(!config.strict_metrics);
    }

    #[test]
    fn test_same_input_and_output_invalid() {
        let mut config = Config::default();
        config.report_path = config.summary_path.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_vus_invalid() {
        let mut config = Config::default();
        config.vus = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_free_form_duration_is_valid() {
        let mut config = Config::default();
        for duration in ["10s", "1m30s", "10 seconds", "about a minute"] {
            config.duration = duration.to_string();
            assert!(config.validate().is_ok(), "{} should be accepted", duration);
        }
    }

    #[test]
    fn test_empty_endpoint_invalid() {
        let mut config = Config::default();
        config.endpoint = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_merge_from_vars() {
        let mut config = Config::default();
        config.merge_from_vars([
            ("LOADTEST_SUMMARY", "out/summary.json"),
            ("LOADTEST_REPORT", "out/REPORT.md"),
            ("VU_COUNT", "250"),
            ("DURATION", "30s"),
            ("TARGET_ENDPOINT", "POST /flashsale/products/1/join"),
            ("STOCK", "100"),
            ("STRICT_METRICS", "true"),
            ("ENABLE_COLOR", "false"),
            ("UNRELATED", "ignored"),
        ]).unwrap();

        assert_eq!(config.summary_path, PathBuf::from("out/summary.json"));
        assert_eq!(config.report_path, PathBuf::from("out/REPORT.md"));
        assert_eq!(config.vus, Some(250));
        assert_eq!(config.duration, "30s");
        assert_eq!(config.endpoint, "POST /flashsale/products/1/join");
        assert_eq!(config.stock, Some(100));
        assert!(config.strict_metrics);
        assert!(!config.enable_color);
    }

    #[test]
    fn test_merge_rejects_bad_numbers() {
        let mut config = Config::default();
        let error = config.merge_from_vars([("STOCK", "lots")]).unwrap_err();
        assert_eq!(error.category(), "CONFIG");
        assert!(error.to_string().contains("STOCK"));

        let error = config.merge_from_vars([("VU_COUNT", "-5")]).unwrap_err();
        assert!(error.to_string().contains("VU_COUNT"));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let mut config = Config::default();
        config.merge_from_vars([
            ("LOADTEST_SUMMARY", " "),
            ("LOADTEST_REPORT", ""),
            ("VU_COUNT", ""),
            ("DURATION", ""),
            ("TARGET_ENDPOINT", "  "),
            ("STOCK", ""),
            ("STRICT_METRICS", ""),
            ("ENABLE_COLOR", ""),
        ]).unwrap();

        let defaults = Config::default();
        assert_eq!(config.summary_path, defaults.summary_path);
        assert_eq!(config.report_path, defaults.report_path);
        assert_eq!(config.vus, None);
        assert_eq!(config.duration, defaults.duration);
        assert_eq!(config.endpoint, defaults.endpoint);
        assert_eq!(config.stock, None);
        assert_eq!(config.strict_metrics, defaults.strict_metrics);
        assert_eq!(config.enable_color, defaults.enable_color);
    }

    #[test]
    fn test_flag_spellings() {
        let mut config = Config::default();
        for (value, expected) in [("1", true), ("0", false), ("YES", true), ("off", false), ("True", true)] {
            config.merge_from_vars([("STRICT_METRICS", value)]).unwrap();
            assert_eq!(config.strict_metrics, expected, "STRICT_METRICS={}", value);
        }

        let error = config.merge_from_vars([("ENABLE_COLOR", "maybe")]).unwrap_err();
        assert_eq!(error.category(), "CONFIG");
        assert!(error.to_string().contains("ENABLE_COLOR"));
    }
}
