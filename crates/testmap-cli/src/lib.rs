//! testmap CLI - list mocha suites and tests without running them.
//!
//! - [`cli`] - clap argument definitions
//! - [`config`] - figment-layered configuration
//! - [`commands`] - the listing command
//! - [`error`] - error types and miette conversion
//! - [`logger`] - tracing setup
//! - [`ui`] - color detection and the fatal banner

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
