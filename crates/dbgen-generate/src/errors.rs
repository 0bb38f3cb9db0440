use rust_xlsxwriter::XlsxError;
use thiserror::Error;

/// Errors emitted by the generation pipelines.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Config(#[from] dbgen_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] XlsxError),
}

impl GenerationError {
    /// True for invalid input, as opposed to I/O or encoding failures.
    pub fn is_configuration(&self) -> bool {
        matches!(self, GenerationError::Config(_))
    }
}
