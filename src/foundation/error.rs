use std::path::{Path, PathBuf};

/// Convenience result type used across circlemask.
pub type MaskResult<T> = Result<T, MaskError>;

/// Error taxonomy for the masking pipeline.
#[derive(thiserror::Error, Debug)]
pub enum MaskError {
    /// Wrong number of command-line arguments. Not fatal: callers print usage and stop.
    #[error("usage error: {0}")]
    Usage(String),

    /// A file could not be opened, read, created or written.
    #[error("io error on '{}'", .path.display())]
    Io {
        /// File the operation targeted.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Unrecognized or corrupt image data.
    #[error("decode error: {0}")]
    Decode(String),

    /// A numeric argument was not an integer.
    #[error("parse error: {0}")]
    Parse(String),

    /// Input is well-formed but cannot produce an output (e.g. empty mask bounds).
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MaskError {
    /// Build a [`MaskError::Usage`] value.
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// Build a [`MaskError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`MaskError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`MaskError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MaskError::Io`] value for an operation on `path`.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True for [`MaskError::Usage`], which front ends treat as a non-error exit.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
