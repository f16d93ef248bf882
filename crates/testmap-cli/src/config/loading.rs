use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use serde::Serialize;
use tracing::debug;

use crate::cli::Cli;
use crate::config::{CONFIG_FILE, ENV_PREFIX, TestmapConfig};
use crate::error::{ConfigError, Result};

/// Flags that were given on the command line, and nothing else.
#[derive(Debug, Default, Serialize)]
struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extensions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recursive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ui: Option<testmap_js::Interface>,
    #[serde(skip_serializing_if = "Option::is_none")]
    compact: Option<bool>,
}

impl CliOverrides {
    fn from_cli(args: &Cli) -> Self {
        Self {
            root: args.root.clone(),
            extensions: (!args.extensions.is_empty()).then(|| {
                args.extensions
                    .iter()
                    .map(|ext| ext.trim().trim_start_matches('.').to_string())
                    .filter(|ext| !ext.is_empty())
                    .collect()
            }),
            recursive: args.no_recursive.then_some(false),
            ui: args.ui.map(Into::into),
            compact: args.compact.then_some(true),
        }
    }
}

impl TestmapConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    pub fn load(args: &Cli, cwd: &Path) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = match &args.config {
            Some(path) => {
                let path = cwd.join(path);
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path).into());
                }
                Some(path)
            }
            None => {
                let default_path = cwd.join(CONFIG_FILE);
                default_path.is_file().then_some(default_path)
            }
        };

        if let Some(path) = config_file {
            debug!(path = %path.display(), "using config file");
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX));
        figment = figment.merge(Serialized::defaults(CliOverrides::from_cli(args)));

        let config: Self = figment.extract().map_err(|e| ConfigError::Invalid {
            message: e.to_string(),
        })?;

        if config.extensions.is_empty() {
            return Err(ConfigError::NoExtensions.into());
        }
        Ok(config)
    }
}
