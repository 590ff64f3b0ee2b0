use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Could not extract text from the uploaded document: {0}")]
    #[diagnostic(code(shiftsheet::acquisition))]
    Acquisition(String),

    #[error("Schedule store error: {0}")]
    #[diagnostic(code(shiftsheet::store))]
    Store(String),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(shiftsheet::serialization))]
    Serialization(String),
}

// Stored records pass through serde_json on every store round trip
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type AppResult<T> = Result<T, Error>;
