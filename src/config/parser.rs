//! Configuration parsing from CLI arguments and environment variables

use crate::{
    cli::{self, Cli},
    config::env::EnvManager,
    error::Result,
    models::Config,
};

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
}

impl ConfigParser {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<Config> {
        // Load from environment file if it exists
        EnvManager::load_env_file()?;

        self.parse_with_vars(std::env::vars())
    }

    /// Build the configuration from explicit environment pairs
    pub fn parse_with_vars<I, K, V>(&self, vars: I) -> Result<Config>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Config::default();

        let mut color_from_env = false;
        let vars = vars.into_iter().inspect(|(key, value)| {
            if key.as_ref() == "ENABLE_COLOR" && !value.as_ref().trim().is_empty() {
                color_from_env = true;
            }
        });
        config.merge_from_vars(vars)?;

        if !color_from_env && !cli::supports_color() {
            config.enable_color = false;
        }

        self.apply_cli_overrides(&mut config);

        config.validate()?;

        Ok(config)
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) {
        if let Some(ref summary) = self.cli.summary {
            config.summary_path = summary.clone();
        }

        if let Some(ref output) = self.cli.output {
            config.report_path = output.clone();
        }

        if let Some(vus) = self.cli.vus {
            config.vus = Some(vus);
        }

        if let Some(ref duration) = self.cli.duration {
            config.duration = duration.clone();
        }

        if let Some(ref endpoint) = self.cli.endpoint {
            config.endpoint = endpoint.clone();
        }

        if let Some(stock) = self.cli.stock {
            config.stock = Some(stock);
        }

        if self.cli.strict {
            config.strict_metrics = true;
        }

        if let Some(color) = self.cli.color_override() {
            config.enable_color = color;
        }

        // Set verbose and debug flags (these are CLI-only)
        config.verbose = self.cli.verbose || self.cli.debug;
        config.debug = self.cli.debug;
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    ConfigParser::new(cli).parse()
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = Vec::new();

    summary.push(format!("Summary: {}", config.summary_path.display()));
    summary.push(format!("Report: {}", config.report_path.display()));
    summary.push(format!("VUs: {}", config.vus.map_or_else(|| "from summary".to_string(), |v| v.to_string())));
    summary.push(format!("Duration: {}", config.duration));
    summary.push(format!("Endpoint: {}", config.endpoint));
    summary.push(format!("Stock: {}", config.stock.map_or_else(|| "not set".to_string(), |s| s.to_string())));
    summary.push(format!("Strict Metrics: {}", config.strict_metrics));
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Verbose: {}", config.verbose));
    summary.push(format!("Debug: {}", config.debug));

    summary.join("\n")
}
