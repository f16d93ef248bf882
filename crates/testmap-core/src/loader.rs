//! Module loading seam and the sequential discovery driver.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::dsl::Suite;
use crate::error::{DiscoveryError, LoadError, Result};
use crate::finalize::Inventory;
use crate::recorder::Recorder;
use crate::site::SiteResolver;

/// How a file is brought in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadForm {
    /// Evaluated inline, like `require()`.
    Sync,
    /// Evaluated behind one await point, like `import()`.
    Async,
}

/// Evaluates a test file's top-level code against a declaration scope.
///
/// Implementations must evaluate each file exactly once per call and must not
/// run test or hook bodies themselves.
#[async_trait(?Send)]
pub trait ModuleLoader {
    fn form(&self, path: &Path) -> LoadForm;

    fn load(&self, path: &Path, scope: &mut Suite<'_>) -> Result<(), LoadError>;

    async fn import(&self, path: &Path, scope: &mut Suite<'_>) -> Result<(), LoadError>;
}

/// One discovery run: loads files in order and finalizes the inventory.
#[derive(Debug)]
pub struct Discovery {
    recorder: Recorder,
    files_loaded: usize,
}

impl Discovery {
    pub fn new(resolver: SiteResolver) -> Self {
        Self {
            recorder: Recorder::new(resolver),
            files_loaded: 0,
        }
    }

    /// Run declarations written against the Rust DSL.
    pub fn declare<F>(&mut self, declare: F) -> Result<(), LoadError>
    where
        F: FnOnce(&mut Suite<'_>) -> Result<(), LoadError>,
    {
        declare(&mut self.recorder.scope())
    }

    /// Load one file.
    pub async fn load_file<L>(&mut self, loader: &L, path: &Path) -> Result<()>
    where
        L: ModuleLoader + ?Sized,
    {
        let form = loader.form(path);
        debug!(path = %path.display(), ?form, "loading test file");

        let result = match form {
            LoadForm::Sync => loader.load(path, &mut self.recorder.scope()),
            LoadForm::Async => loader.import(path, &mut self.recorder.scope()).await,
        };
        result.map_err(|source| DiscoveryError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        // Suites pop on the way out even when their body fails.
        debug_assert!(self.recorder.route().is_empty());

        self.files_loaded += 1;
        Ok(())
    }

    /// Load files strictly one after another; the first failure aborts.
    pub async fn load_files<L>(&mut self, loader: &L, files: &[PathBuf]) -> Result<()>
    where
        L: ModuleLoader + ?Sized,
    {
        for file in files {
            self.load_file(loader, file).await?;
        }
        Ok(())
    }

    pub fn files_loaded(&self) -> usize {
        self.files_loaded
    }

    pub fn finish(self) -> Inventory {
        debug!(files = self.files_loaded, "discovery finished");
        self.recorder.finish()
    }
}
