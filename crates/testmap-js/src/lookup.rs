//! Test file lookup.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use testmap_core::{DiscoveryError, Result};

/// Collect test files under `root`.
///
/// A missing `root` is retried with each extension appended (`test/unit` ->
/// `test/unit.js`). A file root is returned as is, whatever its extension.
/// Directories are walked in file-name order; hidden files are skipped and so
/// are entries that cannot be read.
pub fn lookup_files(root: &Path, extensions: &[String], recursive: bool) -> Result<Vec<PathBuf>> {
    let root = resolve_root(root, extensions)?;

    if root.is_file() {
        return Ok(vec![root]);
    }

    let mut walker = WalkDir::new(&root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };
        if file_name.starts_with('.') || !has_extension(file_name, extensions) {
            continue;
        }
        files.push(entry.into_path());
    }

    debug!(root = %root.display(), count = files.len(), "looked up test files");
    Ok(files)
}

fn resolve_root(root: &Path, extensions: &[String]) -> Result<PathBuf> {
    if root.exists() {
        return Ok(root.to_path_buf());
    }

    extensions
        .iter()
        .map(|ext| {
            let mut candidate = root.as_os_str().to_owned();
            candidate.push(".");
            candidate.push(ext);
            PathBuf::from(candidate)
        })
        .find(|candidate| candidate.exists())
        .ok_or_else(|| DiscoveryError::PathResolution(root.to_path_buf()))
}

fn has_extension(file_name: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| {
        file_name
            .strip_suffix(ext.as_str())
            .is_some_and(|stem| stem.ends_with('.'))
    })
}
