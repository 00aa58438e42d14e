//! Error types for the widget crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or saving a [`SegmentControlStyle`](crate::SegmentControlStyle).
#[derive(Error, Debug)]
pub enum StyleError {
    /// The style file could not be read or written.
    #[error("failed to access style file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML text was malformed or had values of the wrong type.
    #[error("failed to parse style: {0}")]
    Parse(#[from] toml::de::Error),

    /// The style could not be written as TOML.
    #[error("failed to serialize style: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value parsed but is outside its allowed range.
    #[error("invalid style value for '{field}': {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Result type for style operations.
pub type StyleResult<T> = Result<T, StyleError>;
