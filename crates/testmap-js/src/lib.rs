//! # testmap-js
//!
//! Lists the suites and tests of a mocha test directory without running any
//! test code.
//!
//! ```no_run
//! # async fn run() -> testmap_js::testmap_core::Result<()> {
//! let inventory = testmap_js::find_suites_and_tests("test", "js").await?;
//! for test in &inventory.tests {
//!     println!("{test}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Files are found with [`lookup_files`], then evaluated one after another by
//! [`JsLoader`]: `describe` bodies are entered, `it` and hook bodies are not.

mod evaluator;
mod interface;
mod line_index;
mod loader;
mod lookup;

use std::path::{Path, PathBuf};

use tracing::info;

use testmap_core::{Discovery, Inventory, Result, SiteResolver};

pub use interface::{Entry, Interface};
pub use loader::JsLoader;
pub use lookup::lookup_files;
pub use testmap_core;

/// Extensions searched when none are given.
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["js", "cjs", "mjs"];

/// One or more file extensions, without the leading dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extensions(Vec<String>);

impl Extensions {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for Extensions {
    fn default() -> Self {
        Self::from(DEFAULT_EXTENSIONS)
    }
}

impl From<&str> for Extensions {
    fn from(ext: &str) -> Self {
        Self(vec![ext.trim_start_matches('.').to_string()])
    }
}

impl From<String> for Extensions {
    fn from(ext: String) -> Self {
        Self::from(ext.as_str())
    }
}

impl From<Vec<String>> for Extensions {
    fn from(exts: Vec<String>) -> Self {
        Self::from(exts.as_slice())
    }
}

impl From<&[String]> for Extensions {
    fn from(exts: &[String]) -> Self {
        Self(
            exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect(),
        )
    }
}

impl<const N: usize> From<[&str; N]> for Extensions {
    fn from(exts: [&str; N]) -> Self {
        Self(
            exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect(),
        )
    }
}

/// Everything a discovery run can be told.
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    pub extensions: Extensions,
    /// Descend into subdirectories of the root.
    pub recursive: bool,
    pub interface: Interface,
    /// Base for relative roots and for reported source files. Defaults to the
    /// process working directory.
    pub cwd: Option<PathBuf>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            extensions: Extensions::default(),
            recursive: true,
            interface: Interface::default(),
            cwd: None,
        }
    }
}

/// List the suites and tests under `root` using the BDD interface.
pub async fn find_suites_and_tests(
    root: impl AsRef<Path>,
    extensions: impl Into<Extensions>,
) -> Result<Inventory> {
    let options = DiscoveryOptions {
        extensions: extensions.into(),
        ..DiscoveryOptions::default()
    };
    find_suites_and_tests_with(root, &options).await
}

/// [`find_suites_and_tests`] with every option spelled out.
pub async fn find_suites_and_tests_with(root: impl AsRef<Path>, options: &DiscoveryOptions) -> Result<Inventory> {
    let cwd = match &options.cwd {
        Some(cwd) => cwd.clone(),
        None => std::env::current_dir()?,
    };
    let root = root.as_ref();
    let root = if root.is_absolute() {
        root.to_path_buf()
    } else {
        cwd.join(root)
    };

    let files = lookup_files(&root, options.extensions.as_slice(), options.recursive)?;
    info!(
        root = %root.display(),
        files = files.len(),
        interface = %options.interface,
        "discovering tests"
    );

    let loader = JsLoader::new(options.interface, &cwd);
    let mut discovery = Discovery::new(SiteResolver::new(&cwd));
    discovery.load_files(&loader, &files).await?;
    Ok(discovery.finish())
}
