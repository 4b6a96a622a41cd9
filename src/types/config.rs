use crate::error::LeadscoreError;
use crate::report::OutputFormat;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_EXPORT_DIR: &str = ".leadscore/reports";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Operator settings. None of these change how a lead is scored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadscoreConfig {
    pub input: Option<InputConfig>,
    pub report: Option<ReportConfig>,
    pub export: Option<ExportConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub max_records: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
    pub show_signals: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl LeadscoreConfig {
    pub fn max_records(&self) -> Option<usize> {
        self.input.as_ref().and_then(|input| input.max_records)
    }

    pub fn report_format(&self) -> Option<OutputFormat> {
        self.report
            .as_ref()
            .and_then(|report| report.format.as_deref())
            .and_then(OutputFormat::from_name)
    }

    pub fn show_signals(&self) -> bool {
        self.report
            .as_ref()
            .and_then(|report| report.show_signals)
            .unwrap_or(true)
    }

    pub fn export_dir(&self) -> &str {
        self.export
            .as_ref()
            .and_then(|export| export.dir.as_deref())
            .unwrap_or(DEFAULT_EXPORT_DIR)
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn validate(&self) -> Result<(), LeadscoreError> {
        if self.max_records() == Some(0) {
            return Err(LeadscoreError::ConfigParse(
                "input.max_records must be greater than 0".to_string(),
            ));
        }

        if let Some(format) = self
            .report
            .as_ref()
            .and_then(|report| report.format.as_deref())
        {
            if OutputFormat::from_name(format).is_none() {
                return Err(LeadscoreError::ConfigParse(format!(
                    "unsupported report.format: {format} (expected md or json)"
                )));
            }
        }

        if self.export_dir().trim().is_empty() {
            return Err(LeadscoreError::ConfigParse(
                "export.dir must not be empty".to_string(),
            ));
        }

        let level = self.log_level();
        if EnvFilter::try_new(level).is_err() {
            return Err(LeadscoreError::ConfigParse(format!(
                "logging.level is not a valid filter directive: {level}"
            )));
        }

        Ok(())
    }
}
