//! Error types for resume client operations

use thiserror::Error;

/// Result type alias for resume client operations
pub type Result<T> = std::result::Result<T, UploadError>;

/// Errors that can occur during an upload attempt
///
/// The `Display` strings are the user-facing messages. Rejected and
/// transport failures both render as `Failed to parse resume.` — the
/// HTTP status and response body are kept off the display surface on
/// purpose, matching the service's UI contract. The status is still
/// carried on [`UploadError::Rejected`] for logging.
#[derive(Error, Debug)]
pub enum UploadError {
    /// No file was selected before triggering the upload
    #[error("Please select a resume (PDF or DOCX)")]
    NoFileSelected,

    /// The request never completed (connection refused, timeout, ...)
    #[error("Failed to parse resume.")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("Failed to parse resume.")]
    Rejected { status: u16 },

    /// The server answered 2xx but the body was not valid JSON
    #[error("{0}")]
    Decode(String),

    /// Invalid base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The selected file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
