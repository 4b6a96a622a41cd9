pub mod json;
pub mod md;

use crate::error::LeadscoreError;
use crate::types::report::AggregateReport;
use crate::types::scoring::ScoreResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "md" | "markdown" => Some(Self::Md),
            _ => None,
        }
    }
}

pub fn render_lead(
    result: &ScoreResult,
    format: OutputFormat,
    show_signals: bool,
) -> Result<String, LeadscoreError> {
    match format {
        OutputFormat::Json => json::to_json(result).map_err(LeadscoreError::Json),
        OutputFormat::Md => Ok(md::lead_to_markdown(result, show_signals)),
    }
}

pub fn render_report(
    report: &AggregateReport,
    format: OutputFormat,
) -> Result<String, LeadscoreError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(LeadscoreError::Json),
        OutputFormat::Md => Ok(md::report_to_markdown(report)),
    }
}
