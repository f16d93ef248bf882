//! Error types for discovery runs.

use std::path::PathBuf;

use thiserror::Error;

use crate::site::SourceLocation;

pub type Result<T, E = DiscoveryError> = std::result::Result<T, E>;

/// Failure while evaluating one file's declarations.
///
/// Any of these aborts the whole run; no partial inventory is produced.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file does not parse.
    #[error("syntax error in {}: {message}", .path.display())]
    Syntax { path: PathBuf, message: String },

    /// Top-level code or a suite body threw.
    #[error("uncaught exception at {location}: {message}")]
    Thrown {
        location: SourceLocation,
        message: String,
    },

    /// A suite was declared without a body to run.
    #[error("suite \"{name}\" was defined but no callback was supplied ({location})")]
    MissingCallback {
        name: String,
        location: SourceLocation,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error raised by a Rust suite body.
    #[error("{0}")]
    Custom(String),
}

/// Top-level error of a discovery run.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Neither the root path nor any extension-augmented variant exists.
    #[error("cannot resolve path (or pattern) '{}'", .0.display())]
    PathResolution(PathBuf),

    #[error("failed to load {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
