use crate::error::{LeadscoreError, Result};
use tracing_subscriber::EnvFilter;

/// Maps `-q` / `-v` / `-vv` onto a filter directive, falling back to the
/// configured level.
pub fn filter_directive(verbose: u8, quiet: bool, configured: &str) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Picks the directive to install. A non-blank `RUST_LOG` that parses wins
/// over flags and config; anything else falls back to [`filter_directive`].
pub fn effective_directive(
    env_value: Option<&str>,
    verbose: u8,
    quiet: bool,
    configured: &str,
) -> String {
    match env_value.map(str::trim) {
        Some(env) if !env.is_empty() && EnvFilter::try_new(env).is_ok() => env.to_string(),
        _ => filter_directive(verbose, quiet, configured),
    }
}

/// Installs the global subscriber. Logs go to stderr so reports on stdout
/// stay parseable.
pub fn init(verbose: u8, quiet: bool, configured: &str) -> Result<()> {
    let env_value = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = effective_directive(env_value.as_deref(), verbose, quiet, configured);
    let env_filter = EnvFilter::try_new(&directive).map_err(|e| {
        LeadscoreError::Telemetry(format!("invalid log filter '{directive}': {e}"))
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|e| LeadscoreError::Telemetry(e.to_string()))
}
