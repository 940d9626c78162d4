/*!
 * Error types for the srtserve application.
 *
 * This module contains custom error types for different parts of the
 * request pipeline, using the thiserror crate for ergonomic error
 * definitions.
 */

use thiserror::Error;

/// Errors that can occur when calling a translation provider
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Error when making an API request fails (network, timeout)
    #[error("Translation request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse provider response: {0}")]
    ResponseParse(String),

    /// Error returned by the API itself
    #[error("Provider responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Response was well-formed but carried no translation
    #[error("Provider response is missing the translated text")]
    MissingTranslation,

    /// Input text was empty before any remote call was made
    #[error("Cannot translate empty text")]
    EmptyText,
}

/// Errors that can occur while parsing an SRT document
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// The document contained no subtitle blocks at all
    #[error("Subtitle document contains no entries")]
    EmptyDocument,

    /// A block's first line could not be read as a sequence index
    #[error("Block {block}: invalid sequence index '{value}'")]
    InvalidIndex {
        /// 1-based position of the offending block
        block: usize,
        /// The line that failed to parse
        value: String,
    },

    /// A block was missing its `HH:MM:SS,mmm --> HH:MM:SS,mmm` line
    #[error("Block {block}: missing or malformed timestamp line")]
    MissingTimestamps {
        /// 1-based position of the offending block
        block: usize,
    },

    /// A block had an index and timestamps but no text lines
    #[error("Block {block}: no subtitle text")]
    MissingText {
        /// 1-based position of the offending block
        block: usize,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Bad or missing upload, user-correctable
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Workspace read/write failure
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed subtitle document
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Remote translation call failed or returned an unexpected shape
    #[error("Translation error: {0}")]
    Gateway(#[from] GatewayError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AppError {
    /// HTTP status code this error maps to.
    /// Validation failures are the caller's fault; everything else
    /// from the pipeline surfaces as a server error.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Validation(_) => 400,
            _ => 500,
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
