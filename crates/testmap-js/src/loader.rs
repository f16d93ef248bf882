//! [`ModuleLoader`] for JavaScript test files.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use testmap_core::{LoadError, LoadForm, ModuleLoader, SiteResolver, Suite};

use crate::evaluator::{SourceFile, evaluate};
use crate::interface::Interface;

/// Loads `.js`/`.cjs` files inline and `.mjs` files through an async read,
/// mirroring `require()` versus `import()`.
#[derive(Debug, Clone)]
pub struct JsLoader {
    interface: Interface,
    cwd: PathBuf,
    resolver: SiteResolver,
}

impl JsLoader {
    pub fn new(interface: Interface, cwd: impl Into<PathBuf>) -> Self {
        let cwd = cwd.into();
        Self {
            interface,
            resolver: SiteResolver::new(&cwd),
            cwd,
        }
    }

    pub fn interface(&self) -> Interface {
        self.interface
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        path_clean::clean(self.cwd.join(path))
    }

    fn eval(&self, path: &Path, frame_file: String, text: &str, scope: &mut Suite<'_>) -> Result<(), LoadError> {
        let source = SourceFile {
            path,
            frame_file,
            text,
        };
        evaluate(&source, self.interface, &self.resolver, scope)
    }
}

#[async_trait(?Send)]
impl ModuleLoader for JsLoader {
    fn form(&self, path: &Path) -> LoadForm {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("mjs") => LoadForm::Async,
            _ => LoadForm::Sync,
        }
    }

    fn load(&self, path: &Path, scope: &mut Suite<'_>) -> Result<(), LoadError> {
        let absolute = self.absolute(path);
        let text = std::fs::read_to_string(&absolute).map_err(|source| LoadError::Read {
            path: absolute.clone(),
            source,
        })?;
        debug!(path = %absolute.display(), bytes = text.len(), "evaluating script");

        let frame_file = absolute.to_string_lossy().to_string();
        self.eval(&absolute, frame_file, &text, scope)
    }

    async fn import(&self, path: &Path, scope: &mut Suite<'_>) -> Result<(), LoadError> {
        let absolute = self.absolute(path);
        let text = tokio::fs::read_to_string(&absolute)
            .await
            .map_err(|source| LoadError::Read {
                path: absolute.clone(),
                source,
            })?;
        debug!(path = %absolute.display(), bytes = text.len(), "evaluating module");

        // ES modules report their location as a URL.
        let frame_file = format!("file://{}", absolute.to_string_lossy());
        self.eval(&absolute, frame_file, &text, scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use testmap_core::Discovery;

    #[test]
    fn test_form_by_extension() {
        let loader = JsLoader::new(Interface::Bdd, "/work");
        assert_eq!(loader.form(Path::new("a.mjs")), LoadForm::Async);
        assert_eq!(loader.form(Path::new("a.cjs")), LoadForm::Sync);
        assert_eq!(loader.form(Path::new("a.js")), LoadForm::Sync);
    }

    #[tokio::test]
    async fn test_both_forms_report_workspace_relative_files() {
        let temp = TempDir::new().unwrap();
        let cwd = temp.path().canonicalize().unwrap();
        fs::create_dir(cwd.join("test")).unwrap();
        fs::write(cwd.join("test/a.js"), "describe('a', () => {\n  it('x', () => {});\n});\n").unwrap();
        fs::write(cwd.join("test/b.mjs"), "\ndescribe('b', () => {});\n").unwrap();

        let loader = JsLoader::new(Interface::Bdd, &cwd);
        let mut discovery = Discovery::new(SiteResolver::new(&cwd));
        let files = vec![PathBuf::from("test/a.js"), PathBuf::from("test/b.mjs")];
        discovery.load_files(&loader, &files).await.unwrap();

        let inventory = discovery.finish();
        assert_eq!(inventory.extended_tree["a"].children.as_ref().unwrap()["x"].source_line, 2);
        assert_eq!(inventory.extended_tree["a"].source_file, "test/a.js");
        assert_eq!(inventory.extended_tree["b"].source_file, "test/b.mjs");
        assert_eq!(inventory.extended_tree["b"].source_line, 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_a_read_error() {
        let temp = TempDir::new().unwrap();
        let loader = JsLoader::new(Interface::Bdd, temp.path());
        let mut discovery = Discovery::new(SiteResolver::new(temp.path()));
        let err = discovery
            .load_file(&loader, Path::new("gone.js"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            testmap_core::DiscoveryError::Load {
                source: LoadError::Read { .. },
                ..
            }
        ));
    }
}
