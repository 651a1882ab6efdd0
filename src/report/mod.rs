//! Report generation pipeline
//!
//! [`ReportGenerator`] runs the four stages in order:
//!
//! 1. **load** the k6 summary into a [`MetricsDocument`]
//! 2. **extract** the report values, substituting defaults for missing fields
//! 3. **render** the Markdown report
//! 4. **persist** it to the report path
//!
//! Missing metrics never abort the run. The only value that can stop
//! rendering is a missing p95 latency when strict metrics are enabled.

use crate::{
    defaults::DEFAULT_VUS,
    error::{AppError, Result},
    logging::{Logger, LoggerFactory, PerformanceLogger},
    models::{Config, MetricLookup, MetricValue, MetricsDocument, ReportOutput, ReportValues, ScenarioInfo},
    output::{OutputFormatterFactory, ReportFormatter},
    types::{field_names, metric_names, OutcomeClass},
    log_debug, log_info, log_warn,
};
use std::path::{Path, PathBuf};

/// Everything produced by a successful run
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    /// Where the report was written
    pub path: PathBuf,
    pub values: ReportValues,
    pub scenario: ScenarioInfo,
    pub report: ReportOutput,
}

/// Report generator driving the load/extract/render/persist pipeline
pub struct ReportGenerator {
    config: Config,
    formatter: Box<dyn ReportFormatter>,
    logger: Logger,
    perf: PerformanceLogger,
}

impl ReportGenerator {
    /// Create a generator with its own logging session
    pub fn new(config: Config) -> Self {
        let factory = LoggerFactory::new(config.clone());
        Self::with_logger_factory(config, &factory)
    }

    /// Create a generator sharing an existing logging session
    pub fn with_logger_factory(config: Config, factory: &LoggerFactory) -> Self {
        Self {
            formatter: OutputFormatterFactory::create_report_formatter(),
            logger: factory.create_logger("REPORT"),
            perf: factory.create_performance_logger(),
            config,
        }
    }

    /// Run the full pipeline using the configured paths
    pub fn run(&mut self) -> Result<GeneratedReport> {
        let summary_path = self.config.summary_path.clone();
        let report_path = self.config.report_path.clone();

        log_info!(self.logger, "Generating report from {}", summary_path.display());

        self.perf.start_timing("load");
        let document = self.load(&summary_path);
        self.perf.end_timing("load");
        let document = document?;

        self.perf.start_timing("extract");
        let values = self.extract(&document);
        let scenario = self.resolve_scenario(&document);
        self.perf.end_timing("extract");

        self.check_stock(&values, &scenario);

        self.perf.start_timing("render");
        let report = self.render(&values, &scenario);
        self.perf.end_timing("render");
        let report = report?;

        self.perf.start_timing("persist");
        let persisted = self.persist(&report, &report_path);
        self.perf.end_timing("persist");
        persisted?;

        self.logger.info("Report written")
            .field("path", report_path.display().to_string())
            .field("bytes", report.len())
            .log();

        Ok(GeneratedReport {
            path: report_path,
            values,
            scenario,
            report,
        })
    }

    /// Load and parse the summary file
    pub fn load(&self, path: &Path) -> Result<MetricsDocument> {
        let document = MetricsDocument::load(path)?;

        self.logger.debug("Loaded summary")
            .field("path", path.display().to_string())
            .field("metrics", document.metric_count())
            .field("metric_names", document.metric_names().collect::<Vec<_>>())
            .location(file!(), line!(), Some(module_path!()))
            .log();

        if document.metric_count() == 0 {
            log_warn!(self.logger, "Summary {} contains no metrics; every value will use its default", path.display());
        }

        Ok(document)
    }

    /// Extract the report values from a loaded document
    pub fn extract(&self, document: &MetricsDocument) -> ReportValues {
        let mut values = ReportValues {
            request_count: self
                .lookup_first(document, &[(metric_names::HTTP_REQS, field_names::COUNT)])
                .unwrap_or(0),
            failure_rate: self
                .lookup_first(document, &[
                    (metric_names::HTTP_REQ_FAILED, field_names::RATE),
                    (metric_names::HTTP_REQ_FAILED, field_names::VALUE),
                ])
                .unwrap_or(0.0),
            p95_ms: self.extract_p95(document),
            ..Default::default()
        };

        for class in OutcomeClass::ALL {
            *values.outcomes.get_mut(class) = self
                .lookup_first(document, &[(class.counter_name(), field_names::COUNT)])
                .unwrap_or(0);
        }

        self.logger.debug("Extracted report values")
            .values(&values)
            .log();

        values
    }

    /// Build the header description, reading the VU count from the summary
    /// when it is not configured
    pub fn resolve_scenario(&self, document: &MetricsDocument) -> ScenarioInfo {
        let vus = self.config.vus
            .or_else(|| {
                self.lookup_first::<u32>(document, &[
                    (metric_names::VUS_MAX, field_names::MAX),
                    (metric_names::VUS_MAX, field_names::VALUE),
                ])
                .filter(|vus| *vus > 0)
            })
            .unwrap_or(DEFAULT_VUS);

        ScenarioInfo {
            vus,
            duration: self.config.duration.clone(),
            endpoint: self.config.endpoint.clone(),
            stock: self.config.stock,
            ..Default::default()
        }
    }

    /// Render the report text
    pub fn render(&self, values: &ReportValues, scenario: &ScenarioInfo) -> Result<ReportOutput> {
        self.formatter.format_report(values, scenario)
    }

    /// Write the report, overwriting any existing file
    pub fn persist(&self, report: &ReportOutput, path: &Path) -> Result<()> {
        std::fs::write(path, report.as_str())
            .map_err(|e| AppError::io(format!("Failed to write report {}: {}", path.display(), e)))
    }

    /// Warn when successful orders exceed the configured stock
    pub fn check_stock(&self, values: &ReportValues, scenario: &ScenarioInfo) -> bool {
        let Some(stock) = scenario.stock else {
            return false;
        };

        let oversold = values.is_oversold(stock);
        if oversold {
            self.logger.warn(&format!(
                "Oversell detected: {} successful orders exceed stock of {}",
                values.outcomes.ok, stock
            ))
            .field("order_ok", values.outcomes.ok)
            .field("stock", stock)
            .log();
        }
        oversold
    }

    fn extract_p95(&self, document: &MetricsDocument) -> Option<f64> {
        let p95 = self.lookup_first(document, &[
            (metric_names::HTTP_REQ_DURATION, field_names::P95),
            (metric_names::HTTP_REQ_DURATION_EXPECTED, field_names::P95),
        ]);

        if p95.is_some() || self.config.strict_metrics {
            return p95;
        }

        log_warn!(self.logger, "{} {} missing from summary; reporting 0.00 ms",
            metric_names::HTTP_REQ_DURATION, field_names::P95);
        Some(0.0)
    }

    /// First value found among candidate (metric, field) pairs
    fn lookup_first<T: MetricValue>(&self, document: &MetricsDocument, candidates: &[(&str, &str)]) -> Option<T> {
        for (metric, field) in candidates {
            match document.lookup::<T>(metric, field) {
                MetricLookup::Found(value) => return Some(value),
                MetricLookup::Mismatched(found) => {
                    self.logger.warn(&format!("Ignoring {}.{}: expected a number, found {}", metric, field, found))
                        .field("metric", *metric)
                        .field("field", *field)
                        .log();
                }
                MetricLookup::Missing => {
                    log_debug!(self.logger, "{}.{} not present", metric, field);
                }
            }
        }
        None
    }
}
