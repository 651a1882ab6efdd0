//! Output formatting for reports and console display
//!
//! The Markdown report is produced through the [`ReportFormatter`] trait;
//! the optional console summary is produced by [`ConsoleSummary`].

mod colored;
mod formatter;

pub use colored::{ColorScheme, ConsoleSummary, HealthLevel};
pub use formatter::{FormattingOptions, MarkdownFormatter, ReportFormatter};

use crate::models::Config;

/// Output formatting factory for creating appropriate formatters
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create the report formatter
    pub fn create_report_formatter() -> Box<dyn ReportFormatter> {
        Box::new(MarkdownFormatter::new())
    }

    /// Create a console summary formatter based on color preference
    pub fn create_console_summary(enable_color: bool, verbose: bool) -> ConsoleSummary {
        ConsoleSummary::new(FormattingOptions {
            enable_color,
            verbose_mode: verbose,
        })
    }

    /// Create a console summary formatter from configuration
    pub fn from_config(config: &Config) -> ConsoleSummary {
        Self::create_console_summary(config.enable_color, config.verbose)
    }
}
