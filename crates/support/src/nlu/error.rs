//! Error types for the language-service clients.

use thiserror::Error;

/// Errors that can occur when calling the language or transcription service.
#[derive(Debug, Error)]
pub enum NluError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status.
    #[error("language service error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        body: String,
    },

    /// The response did not match the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
