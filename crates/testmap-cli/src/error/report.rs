//! Miette diagnostic conversion for CLI errors.

use miette::Report;
use testmap_js::testmap_core::{DiscoveryError, LoadError};

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Discovery(e) => discovery_error_to_miette(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert DiscoveryError to miette Report
pub fn discovery_error_to_miette(err: DiscoveryError) -> Report {
    match err {
        DiscoveryError::PathResolution(path) => miette::miette!(
            help = "pass the test directory as the first argument or set `root` in testmap.toml",
            "cannot resolve path (or pattern) '{}'",
            path.display()
        ),
        DiscoveryError::Load { path, source } => {
            let help = match &source {
                LoadError::Syntax { .. } => "the file must parse as JavaScript",
                LoadError::MissingCallback { .. } => "give the suite a callback, or mark it pending with describe.skip",
                LoadError::Thrown { .. } => "suite callbacks run during discovery; move setup into before() hooks",
                LoadError::Read { .. } | LoadError::Custom(_) => "check that the file is readable",
            };
            miette::miette!(help = help, "failed to load {}: {}", path.display(), source)
        }
        _ => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_path_resolution_report_keeps_message_and_help() {
        let report = cli_error_to_miette(CliError::Discovery(DiscoveryError::PathResolution(
            PathBuf::from("missing"),
        )));
        assert_eq!(report.to_string(), "cannot resolve path (or pattern) 'missing'");
        assert!(report.help().is_some());
    }

    #[test]
    fn test_load_report_names_the_file() {
        let err = DiscoveryError::Load {
            path: PathBuf::from("test/a.js"),
            source: LoadError::Custom("boom".into()),
        };
        let report = discovery_error_to_miette(err);
        assert_eq!(report.to_string(), "failed to load test/a.js: boom");
    }
}
