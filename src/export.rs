use crate::error::{LeadscoreError, Result};
use crate::types::report::AggregateReport;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Point-in-time copy of a batch report, tagged with the input fingerprint.
///
/// `input_sha256` and `records_read` describe everything loaded from disk.
/// When `input.max_records` truncates the batch, `report.total` is smaller
/// than `records_read` and the hash still covers the dropped records.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSnapshot<'a> {
    pub version: String,
    pub generated_at: String,
    pub input_sha256: String,
    pub records_read: usize,
    pub report: &'a AggregateReport,
}

impl<'a> ReportSnapshot<'a> {
    pub fn new(
        report: &'a AggregateReport,
        input_sha256: &str,
        records_read: usize,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: generated_at.to_rfc3339(),
            input_sha256: input_sha256.to_string(),
            records_read,
            report,
        }
    }
}

pub fn write_snapshot(
    dir: &Path,
    report: &AggregateReport,
    input_sha256: &str,
    records_read: usize,
) -> Result<PathBuf> {
    write_snapshot_at(dir, report, input_sha256, records_read, Utc::now())
}

pub(crate) fn write_snapshot_at(
    dir: &Path,
    report: &AggregateReport,
    input_sha256: &str,
    records_read: usize,
    generated_at: DateTime<Utc>,
) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(LeadscoreError::Io)?;
    let stamp = generated_at.format("%Y%m%dT%H%M%SZ");
    let out_path = dir.join(format!("report-{stamp}.json"));
    let snapshot = ReportSnapshot::new(report, input_sha256, records_read, generated_at);
    let json = serde_json::to_string_pretty(&snapshot)?;
    fs::write(&out_path, json).map_err(LeadscoreError::Io)?;
    Ok(out_path)
}
