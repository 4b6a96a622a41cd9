//! Reads lead documents exported from the document store.

pub mod filesystem;

use crate::error::{LeadscoreError, Result};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct LoadedInput {
    pub records: Vec<Value>,
    /// Files in a directory input that could not be read or parsed.
    pub skipped: Vec<PathBuf>,
    /// SHA-256 over every byte read, in load order.
    pub sha256: String,
}

/// Splits a parsed document into lead records: arrays and `{"leads": [...]}`
/// yield their elements, anything else is a single record.
pub fn records_from_json(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut object) if matches!(object.get("leads"), Some(Value::Array(_))) => {
            match object.remove("leads") {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            }
        }
        other => vec![other],
    }
}

fn parse_file(path: &Path, bytes: &[u8]) -> Result<Value> {
    serde_json::from_slice(bytes)
        .map_err(|e| LeadscoreError::InputParse(format!("{}: {}", path.display(), e)))
}

/// Loads a batch from a JSON file or a directory of JSON documents.
pub fn load_records(path: &Path) -> Result<LoadedInput> {
    if !path.exists() {
        return Err(LeadscoreError::InputNotFound(path.display().to_string()));
    }

    if path.is_dir() {
        return Ok(load_documents(filesystem::list_json_files(path)));
    }

    let bytes = fs::read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(LoadedInput {
        records: records_from_json(parse_file(path, &bytes)?),
        skipped: Vec::new(),
        sha256: filesystem::sha256_hex(hasher),
    })
}

/// Reads each document in turn. Files that cannot be read or parsed are
/// skipped with a warning; unreadable files contribute nothing to the hash.
fn load_documents(files: impl IntoIterator<Item = PathBuf>) -> LoadedInput {
    let mut hasher = Sha256::new();
    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for file in files {
        let bytes = match fs::read(&file) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(file = %file.display(), error = %err, "skipping unreadable lead document");
                skipped.push(file);
                continue;
            }
        };
        hasher.update(&bytes);
        match parse_file(&file, &bytes) {
            Ok(value) => {
                let batch = records_from_json(value);
                debug!(file = %file.display(), records = batch.len(), "loaded lead document");
                records.extend(batch);
            }
            Err(err) => {
                warn!(error = %err, "skipping malformed lead document");
                skipped.push(file);
            }
        }
    }

    LoadedInput {
        records,
        skipped,
        sha256: filesystem::sha256_hex(hasher),
    }
}

/// Loads exactly one lead. A one-element array is accepted.
pub fn load_single(path: &Path) -> Result<Value> {
    if !path.is_file() {
        return Err(LeadscoreError::InputNotFound(path.display().to_string()));
    }
    let bytes = fs::read(path)?;
    let mut records = records_from_json(parse_file(path, &bytes)?);
    if records.len() != 1 {
        return Err(LeadscoreError::InputParse(format!(
            "{}: expected a single lead, found {}",
            path.display(),
            records.len()
        )));
    }
    Ok(records.remove(0))
}
