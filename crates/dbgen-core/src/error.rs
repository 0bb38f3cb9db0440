use thiserror::Error;

/// Core error type shared across dbgen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or missing input. Always raised before any output is written.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }
}

/// Convenience alias for results returned by dbgen crates.
pub type Result<T> = std::result::Result<T, Error>;
