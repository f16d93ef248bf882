//! Error handling for the testmap CLI.
//!
//! Library errors ([`DiscoveryError`]) and configuration errors are folded
//! into [`CliError`]; `main` turns that into a `miette` report with
//! [`cli_error_to_miette`] and prints it under the fatal banner.

mod report;

use std::path::PathBuf;

use testmap_js::testmap_core::DiscoveryError;
use thiserror::Error;

pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Lookup or evaluation of the test files failed
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// Configuration could not be assembled
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The inventory could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors while writing output or reading the environment
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist
    #[error("Config file not found: {}\n\nHint: Create a testmap.toml file or drop --config", .0.display())]
    NotFound(PathBuf),

    /// Merged configuration does not fit the expected shape
    #[error("Invalid configuration: {message}\n\nHint: Check testmap.toml syntax and TESTMAP_* variables")]
    Invalid {
        /// Extraction error reported by figment
        message: String,
    },

    /// No extensions left to search for
    #[error("No file extensions configured\n\nHint: Pass --extension js or set `extensions` in testmap.toml")]
    NoExtensions,
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Prefix the error with `msg`.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound(PathBuf::from("custom.toml"));
        let msg = err.to_string();
        assert!(msg.contains("Config file not found"));
        assert!(msg.contains("custom.toml"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_discovery_error_is_transparent() {
        let err: CliError = DiscoveryError::PathResolution(PathBuf::from("test")).into();
        assert_eq!(err.to_string(), "cannot resolve path (or pattern) 'test'");
    }

    #[test]
    fn test_cli_error_from_config_error() {
        let cli_err: CliError = ConfigError::NoExtensions.into();
        assert!(matches!(cli_err, CliError::Config(_)));
    }

    #[test]
    fn test_result_ext_context() {
        let result: std::io::Result<()> = Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let err = result.context("Failed to read working directory").unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to read working directory: I/O error"));
    }
}
