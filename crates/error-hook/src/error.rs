//! Errors produced while formatting and writing entries

use std::io;

/// An entry could not be turned into bytes
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("could not serialize entry as json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not format entry time: {0}")]
    Time(#[from] time::error::Format),
    #[error("{0}")]
    Custom(String),
}

impl FormatError {
    /// Create a new, arbitrary format error
    pub fn custom(message: impl AsRef<str>) -> Self {
        Self::Custom(message.as_ref().to_string())
    }
}

/// A hook failed to handle an entry
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("could not write entry: {0}")]
    Write(#[from] io::Error),
}
