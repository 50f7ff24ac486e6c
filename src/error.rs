//! Error types for the yandown crate.

use thiserror::Error;

/// Errors that can occur when resolving or downloading a public link.
#[derive(Error, Debug)]
pub enum DiskError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Download URL not found in the response for {0}")]
    UrlNotFound(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid download URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Filesystem error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unsupported locale: {0}")]
    LocaleError(String),
}

/// Result type alias for DiskError.
pub type Result<T> = std::result::Result<T, DiskError>;
