//! Command-line interface definition

use clap::Parser;
use std::path::PathBuf;

/// Load Test Report Generator - render a k6 summary as a Markdown report
#[derive(Parser, Debug, Clone)]
#[command(name = "loadtest-report")]
#[command(version, about, long_about = None)]
#[command(after_long_help = crate::config::EnvManager::display_env_help())]
pub struct Cli {
    /// k6 summary JSON to read [default: loadtest/results/k6_summary.json]
    #[arg(value_name = "SUMMARY")]
    pub summary: Option<PathBuf>,

    /// Markdown report to write [default: loadtest/results/README_SNIPPET.md]
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// VU count shown in the report header (read from vus_max when omitted)
    #[arg(long, value_parser = parse_vus)]
    pub vus: Option<u32>,

    /// k6 duration shown in the report header, e.g. 10s or 1m30s
    #[arg(long)]
    pub duration: Option<String>,

    /// Target endpoint shown in the report header
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Available stock; enables the oversell check
    #[arg(long)]
    pub stock: Option<u64>,

    /// Fail when p95 latency is missing instead of reporting 0.00 ms
    #[arg(long)]
    pub strict: bool,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print a console summary and info-level logs
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if let (Some(summary), Some(output)) = (&self.summary, &self.output) {
            if summary == output {
                return Err(format!("Output path must differ from the summary path: {}", output.display()));
            }
        }

        Ok(())
    }

    /// Explicit color choice from the command line, if any
    pub fn color_override(&self) -> Option<bool> {
        if self.color {
            Some(true)
        } else if self.no_color {
            Some(false)
        } else {
            None
        }
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        self.color_override().unwrap_or_else(supports_color)
    }
}

/// Parse a positive VU count
fn parse_vus(s: &str) -> Result<u32, String> {
    if s.starts_with('+') {
        return Err(format!("Invalid VU count: {}", s));
    }

    s.parse::<u32>()
        .map_err(|_| format!("Invalid VU count: {}", s))
        .and_then(|vus| {
            if vus == 0 {
                Err("VU count must be greater than 0".to_string())
            } else {
                Ok(vus)
            }
        })
}

/// Check if the terminal supports color output
pub fn supports_color() -> bool {
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    #[cfg(target_os = "windows")]
    {
        if std::env::var("ANSICON").is_ok() || std::env::var("ConEmuANSI").is_ok() {
            return true;
        }
    }

    #[cfg(unix)]
    {
        true
    }
    #[cfg(not(unix))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_no_arguments() {
        let cli = Cli::parse_from(["loadtest-report"]);
        assert!(cli.summary.is_none());
        assert!(cli.output.is_none());
        assert!(cli.vus.is_none());
        assert!(!cli.strict);
        assert!(!cli.verbose);
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_parsing_positionals() {
        let cli = Cli::parse_from(["loadtest-report", "results/step3_summary.json", "results/REPORT.md"]);
        assert_eq!(cli.summary, Some(PathBuf::from("results/step3_summary.json")));
        assert_eq!(cli.output, Some(PathBuf::from("results/REPORT.md")));

        let cli = Cli::parse_from(["loadtest-report", "only_input.json"]);
        assert_eq!(cli.summary, Some(PathBuf::from("only_input.json")));
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_cli_parsing_all_options() {
        let cli = Cli::parse_from([
            "loadtest-report",
            "in.json",
            "out.md",
            "--vus", "250",
            "--duration", "30s",
            "--endpoint", "POST /flashsale/products/1/join",
            "--stock", "100",
            "--strict",
            "--no-color",
            "--verbose",
            "--debug",
        ]);

        assert_eq!(cli.vus, Some(250));
        assert_eq!(cli.duration.as_deref(), Some("30s"));
        assert_eq!(cli.endpoint.as_deref(), Some("POST /flashsale/products/1/join"));
        assert_eq!(cli.stock, Some(100));
        assert!(cli.strict);
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert!(cli.debug);
    }

    #[test]
    fn test_vus_parsing() {
        assert_eq!(parse_vus("1000"), Ok(1000));
        assert!(parse_vus("0").is_err());
        assert!(parse_vus("-1").is_err());
        assert!(parse_vus("+5").is_err());
        assert!(parse_vus("many").is_err());

        assert!(Cli::try_parse_from(["loadtest-report", "--vus", "0"]).is_err());
        assert!(Cli::try_parse_from(["loadtest-report", "--stock", "-3"]).is_err());
    }

    #[test]
    fn test_cli_validation() {
        let cli = Cli::parse_from(["loadtest-report", "--color", "--no-color"]);
        assert!(cli.validate().is_err());

        let cli = Cli::parse_from(["loadtest-report", "same.json", "same.json"]);
        assert!(cli.validate().is_err());

        let cli = Cli::parse_from(["loadtest-report", "in.json", "out.md"]);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_color_override() {
        assert_eq!(Cli::parse_from(["loadtest-report", "--color"]).color_override(), Some(true));
        assert_eq!(Cli::parse_from(["loadtest-report", "--no-color"]).color_override(), Some(false));
        assert_eq!(Cli::parse_from(["loadtest-report"]).color_override(), None);
        assert!(!Cli::parse_from(["loadtest-report", "--no-color"]).use_colors());
    }
}
