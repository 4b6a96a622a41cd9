use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeadscoreError {
    #[error("input not found: {0}")]
    InputNotFound(String),

    #[error("input parse error: {0}")]
    InputParse(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LeadscoreError>;
