//! Error types for kirjo operations.

use thiserror::Error;

/// Errors that can occur while loading a rich-text document.
///
/// Rendering itself never fails; these only come out of decoding.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
