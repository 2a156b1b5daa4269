//! Export error types.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors that can occur while rendering or re-reading exports.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Archive packaging failed: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Export buffer error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
