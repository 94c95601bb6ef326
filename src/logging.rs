use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] ParseError),
    #[error("failed to install tracing subscriber: {0}")]
    Init(String),
}

/// `RUST_LOG` wins over `default_filter` when it is set and parses.
pub fn build_filter(default_filter: &str) -> Result<EnvFilter, ParseError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_filter),
    }
}

/// Events go to stderr so the stdout transcript stays clean.
pub fn init(default_filter: &str) -> Result<(), LoggingError> {
    let filter = build_filter(default_filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))
}

#[cfg(test)]
#[path = "../tests/src_inline/logging.rs"]
mod tests;
