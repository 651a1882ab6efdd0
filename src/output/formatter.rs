//! Report formatting trait and the Markdown implementation
//!
//! A report is assembled from four sections joined by one blank line. Each
//! section is produced by its own trait method so alternate layouts can reuse
//! the assembly logic in [`ReportFormatter::format_report`].

use crate::{
    error::{AppError, Result},
    models::{OutcomeCounts, ReportOutput, ReportValues, ScenarioInfo},
    types::OutcomeClass,
};
use std::fmt::Write as _;

/// Main trait for report formatting
pub trait ReportFormatter {
    /// Format the title and scenario description
    fn format_header(&self, scenario: &ScenarioInfo) -> Result<String>;

    /// Format request count, failure rate and p95 latency
    fn format_results_summary(&self, values: &ReportValues) -> Result<String>;

    /// Format the per-status business outcome counts
    fn format_business_outcomes(&self, outcomes: &OutcomeCounts) -> Result<String>;

    /// Format the closing remark
    fn format_closing_note(&self) -> Result<String>;

    /// Assemble the complete report
    fn format_report(&self, values: &ReportValues, scenario: &ScenarioInfo) -> Result<ReportOutput> {
        let sections = [
            self.format_header(scenario)?,
            self.format_results_summary(values)?,
            self.format_business_outcomes(&values.outcomes)?,
            self.format_closing_note()?,
        ];

        let mut text = sections.join("\n\n");
        text.push('\n');
        Ok(ReportOutput::new(text))
    }
}

/// Configuration options for console formatting
#[derive(Debug, Clone)]
pub struct FormattingOptions {
    /// Enable colored output
    pub enable_color: bool,
    /// Enable verbose mode with detailed information
    pub verbose_mode: bool,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            verbose_mode: false,
        }
    }
}

/// Markdown report formatter (Traditional Chinese labels)
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Label for an outcome class line
    fn outcome_label(class: OutcomeClass) -> &'static str {
        match class {
            OutcomeClass::Ok => "✅ 成功下單（200）",
            OutcomeClass::SoldOut => "⚠️ 售完/不足（409）",
            OutcomeClass::Busy => "⏳ 忙碌稍後重試（429）",
            OutcomeClass::Other => "❓ 其他狀態",
        }
    }

    fn format_rate(rate: f64) -> Result<String> {
        if !rate.is_finite() {
            return Err(AppError::format(format!("failure rate is not a finite number: {}", rate)));
        }
        Ok(format!("{:.4}", rate))
    }

    fn format_latency(p95_ms: Option<f64>) -> Result<String> {
        match p95_ms {
            Some(value) if value.is_finite() => Ok(format!("{:.2} ms", value)),
            Some(value) => Err(AppError::format(format!("p95 latency is not a finite number: {}", value))),
            None => Err(AppError::format(
                "http_req_duration p(95) is missing from the summary; cannot render latency",
            )),
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_header(&self, scenario: &ScenarioInfo) -> Result<String> {
        let mut output = String::new();

        let stock_goal = match scenario.stock {
            Some(stock) => format!("**不應超過庫存（{}）**", stock),
            None => "**不應超過庫存**".to_string(),
        };

        writeln!(output, "## 壓測證據（k6 搶購 {} 併發）", scenario.vus)?;
        writeln!(output)?;
        writeln!(output, "- 測試工具：{}", scenario.tool)?;
        writeln!(output, "- 目標：`{}`（{}）", scenario.endpoint, scenario.route)?;
        writeln!(output, "- 併發設定：`{}`，**{} VUs**，duration **{}**",
            scenario.executor, scenario.vus, scenario.duration)?;
        write!(output, "- 驗證重點：成功下單數量 {}（搭配 Redis lock + PostgreSQL 原子扣庫存）", stock_goal)?;

        Ok(output)
    }

    fn format_results_summary(&self, values: &ReportValues) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "### 結果摘要")?;
        writeln!(output, "- 總請求數（http_reqs）：{}", values.request_count)?;
        writeln!(output, "- http_req_failed（網路/腳本失敗率）：{}", Self::format_rate(values.failure_rate)?)?;
        write!(output, "- http_req_duration p95：{}", Self::format_latency(values.p95_ms)?)?;

        Ok(output)
    }

    fn format_business_outcomes(&self, outcomes: &OutcomeCounts) -> Result<String> {
        let lines: Vec<String> = OutcomeClass::ALL
            .iter()
            .map(|class| format!("- {}：{}", Self::outcome_label(*class), outcomes.get(*class)))
            .collect();

        Ok(format!("### 業務結果（依 HTTP status 分類）\n{}", lines.join("\n")))
    }

    fn format_closing_note(&self) -> Result<String> {
        Ok("> 備註：成功數理論上不會超過庫存；售完/忙碌屬於預期行為（搶購場景）".to_string())
    }
}
