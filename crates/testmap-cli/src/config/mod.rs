//! Configuration for a testmap run.
//!
//! Sources, lowest priority first: built-in defaults, `testmap.toml` (or the
//! `--config` file), `TESTMAP_*` environment variables, then the command-line
//! flags that were actually given.

mod loading;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use testmap_js::{DEFAULT_EXTENSIONS, DiscoveryOptions, Interface};

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "testmap.toml";

/// Environment variable prefix (`TESTMAP_ROOT`, `TESTMAP_UI`, ...).
pub const ENV_PREFIX: &str = "TESTMAP_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestmapConfig {
    /// Test directory or file, relative to the working directory.
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub recursive: bool,
    pub ui: Interface,
    /// Single-line JSON output.
    pub compact: bool,
}

impl Default for TestmapConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("test"),
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            recursive: true,
            ui: Interface::Bdd,
            compact: false,
        }
    }
}

impl TestmapConfig {
    pub fn discovery_options(&self, cwd: &Path) -> DiscoveryOptions {
        DiscoveryOptions {
            extensions: self.extensions.as_slice().into(),
            recursive: self.recursive,
            interface: self.ui,
            cwd: Some(cwd.to_path_buf()),
        }
    }
}
