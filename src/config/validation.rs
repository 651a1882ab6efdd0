//! Configuration validation utilities and rules

use crate::{
    error::{AppError, Result},
    models::Config,
};
use colored::*;
use regex::Regex;
use std::path::Path;

/// Configuration validator producing non-fatal warnings
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration with comprehensive checks
    pub fn validate_comprehensive(config: &Config) -> Result<Vec<ValidationWarning>> {
        let mut warnings = Vec::new();

        // Basic validation (already done in Config::validate)
        config.validate()?;

        warnings.extend(Self::validate_paths(config));
        warnings.extend(Self::validate_scenario(config)?);

        Ok(warnings)
    }

    /// Check input and output paths
    fn validate_paths(config: &Config) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        if !has_extension(&config.summary_path, "json") {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Info,
                format!("Summary file {} does not have a .json extension", config.summary_path.display())
            ));
        }

        if !has_extension(&config.report_path, "md") {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Info,
                format!("Report file {} does not have a .md extension", config.report_path.display())
            ));
        }

        if let Some(parent) = config.report_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                warnings.push(ValidationWarning::new(
                    ValidationLevel::Warning,
                    format!("Report directory {} does not exist; writing the report will fail", parent.display())
                ));
            }
        }

        warnings
    }

    /// Check the values shown in the report header
    fn validate_scenario(config: &Config) -> Result<Vec<ValidationWarning>> {
        let mut warnings = Vec::new();

        let duration_pattern = Regex::new(r"^(\d+(ms|s|m|h))+$")
            .map_err(|e| AppError::internal(format!("Invalid duration pattern: {}", e)))?;
        if !duration_pattern.is_match(&config.duration) {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Warning,
                format!("Duration '{}' is not a k6 duration such as 10s or 1m30s; it is reported as given", config.duration)
            ));
        }

        if config.stock == Some(0) {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Warning,
                "Stock of 0 means any successful order is reported as oversold".to_string()
            ));
        }

        Ok(warnings)
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case(extension))
}

/// Validation warning levels
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationLevel {
    Info,
    Warning,
}

impl ValidationLevel {
    /// Get display string for level
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
        }
    }

    /// Get color for terminal display
    pub fn color(&self) -> &'static str {
        match self {
            Self::Info => "blue",
            Self::Warning => "yellow",
        }
    }
}

/// Configuration validation warning
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub level: ValidationLevel,
    pub message: String,
}

impl ValidationWarning {
    /// Create a new validation warning
    pub fn new(level: ValidationLevel, message: String) -> Self {
        Self { level, message }
    }

    /// Format warning for display
    pub fn format(&self, use_color: bool) -> String {
        let tag = format!("[{}]", self.level.as_str());
        if use_color {
            format!("{} {}", tag.color(self.level.color()), self.message)
        } else {
            format!("{} {}", tag, self.message)
        }
    }
}

/// Convenience function for comprehensive configuration validation
pub fn validate_config(config: &Config) -> Result<Vec<ValidationWarning>> {
    ConfigValidator::validate_comprehensive(config)
}
