//! Main application orchestration and execution

use crate::{
    cli::Cli,
    config::{display_config_summary, load_config, validate_config},
    error::{AppError, Result},
    logging::LoggerFactory,
    output::OutputFormatterFactory,
    report::{GeneratedReport, ReportGenerator},
};

/// Main application struct that coordinates all components
pub struct App {
    cli: Cli,
}

impl App {
    /// Create a new application instance with CLI configuration
    pub fn new(cli: Cli) -> Result<Self> {
        cli.validate().map_err(AppError::validation)?;
        Ok(Self { cli })
    }

    /// Run the application: generate the report and print the confirmation
    pub fn run(self) -> Result<GeneratedReport> {
        // Load and validate configuration
        let config = load_config(self.cli)?;
        let warnings = validate_config(&config)?;

        let factory = LoggerFactory::new(config.clone());
        let logger = factory.create_logger("APP");

        if config.debug {
            logger.debug(&format!("{} v{}", crate::PKG_NAME, crate::VERSION))
                .field("build_time", option_env!("BUILD_TIME").unwrap_or("unknown"))
                .field("git_commit", option_env!("GIT_COMMIT").unwrap_or("unknown"))
                .field("target", option_env!("TARGET_TRIPLE").unwrap_or("unknown"))
                .log();
            logger.debug("Configuration loaded")
                .field("summary", display_config_summary(&config))
                .log();
        }

        // Display validation warnings
        for warning in &warnings {
            eprintln!("{}", warning.format(config.enable_color));
        }

        let mut generator = ReportGenerator::with_logger_factory(config.clone(), &factory);
        let generated = generator.run()?;

        println!("Generated: {}", generated.path.display());

        if config.verbose {
            let summary = OutputFormatterFactory::from_config(&config)
                .format_summary(&generated.path, &generated.values, &generated.scenario)?;
            println!();
            println!("{}", summary);
        }

        Ok(generated)
    }
}
