//! Errors raised while loading or persisting a workbook.

use std::path::PathBuf;

/// Errors that can occur during workbook I/O.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Both the requested and the alternate output path failed
    #[error(
        "could not save to {} nor to fallback {}: {source}",
        .primary.display(),
        .alternate.display()
    )]
    Save {
        primary: PathBuf,
        alternate: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Structurally unusable schedule
    #[error("malformed schedule: {0}")]
    Malformed(String),
}
