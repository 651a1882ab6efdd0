//! Console summary of a generated report
//!
//! Printed after the confirmation line when running with `--verbose`.

use super::formatter::FormattingOptions;
use crate::{
    error::Result,
    models::{ReportValues, ScenarioInfo},
    types::OutcomeClass,
};
use colored::*;
use std::fmt::Write as _;
use std::path::Path;

/// Failure-rate thresholds used to color the summary
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HealthLevel {
    /// Under 1% failed requests
    Healthy,
    /// Under 5% failed requests
    Degraded,
    /// 5% or more failed requests
    Failing,
}

impl HealthLevel {
    /// Classify a failure rate in 0.0..=1.0
    pub fn from_failure_rate(rate: f64) -> Self {
        if rate < 0.01 {
            Self::Healthy
        } else if rate < 0.05 {
            Self::Degraded
        } else {
            Self::Failing
        }
    }

    /// Get color for this level
    pub fn color(&self) -> Color {
        match self {
            Self::Healthy => Color::Green,
            Self::Degraded => Color::Yellow,
            Self::Failing => Color::Red,
        }
    }
}

/// Color scheme for the console summary
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub header: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub muted: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            header: Color::Blue,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Cyan,
            muted: Color::BrightBlack,
        }
    }
}

/// Console summary formatter
pub struct ConsoleSummary {
    options: FormattingOptions,
    color_scheme: ColorScheme,
}

impl ConsoleSummary {
    /// Create a console summary formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self {
            options,
            color_scheme: ColorScheme::default(),
        }
    }

    /// Apply color to text if colors are enabled
    fn colorize(&self, text: &str, color: Color) -> ColoredString {
        if self.options.enable_color {
            text.color(color)
        } else {
            text.normal()
        }
    }

    /// Apply bold header formatting if colors are enabled
    fn heading(&self, text: &str) -> ColoredString {
        if self.options.enable_color {
            text.bold().color(self.color_scheme.header)
        } else {
            text.normal()
        }
    }

    fn outcome_color(&self, class: OutcomeClass) -> Color {
        match class {
            OutcomeClass::Ok => self.color_scheme.success,
            other if other.is_expected() => self.color_scheme.warning,
            _ => self.color_scheme.error,
        }
    }

    fn outcome_label(class: OutcomeClass) -> String {
        match class.status_code() {
            Some(code) => format!("{} ({})", class.counter_name(), code),
            None => format!("{} (other)", class.counter_name()),
        }
    }

    /// Format the summary block shown after generation
    pub fn format_summary(&self, report_path: &Path, values: &ReportValues, scenario: &ScenarioInfo) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "{}", self.heading("Report Summary"))?;
        writeln!(output, "  {:<14}: {}", "Report", self.colorize(&report_path.display().to_string(), self.color_scheme.muted))?;
        writeln!(output, "  {:<14}: {}", "VUs", self.colorize(&scenario.vus.to_string(), self.color_scheme.info))?;
        writeln!(output, "  {:<14}: {}", "duration", scenario.duration)?;
        writeln!(output, "  {:<14}: {}", "http_reqs", self.colorize(&values.request_count.to_string(), self.color_scheme.info))?;

        let health = HealthLevel::from_failure_rate(values.failure_rate);
        writeln!(output, "  {:<14}: {}", "failed rate",
            self.colorize(&format!("{:.2}%", values.failure_rate * 100.0), health.color()))?;

        let p95 = match values.p95_ms {
            Some(p95) => format!("{:.2} ms", p95),
            None => "N/A".to_string(),
        };
        writeln!(output, "  {:<14}: {}", "p95 duration", p95)?;

        for class in OutcomeClass::ALL {
            writeln!(output, "  {:<24}: {}", Self::outcome_label(class),
                self.colorize(&values.outcomes.get(class).to_string(), self.outcome_color(class)))?;
        }

        if let Some(stock) = scenario.stock {
            let status = if values.is_oversold(stock) {
                self.colorize(&format!("OVERSOLD ({} > {})", values.outcomes.ok, stock), self.color_scheme.error)
            } else {
                self.colorize(&format!("ok ({} <= {})", values.outcomes.ok, stock), self.color_scheme.success)
            };
            write!(output, "  {:<14}: {}", "stock check", status)?;
        }

        Ok(output.trim_end().to_string())
    }
}
