//! Recursive file listing for search target expansion.
//!
//! Supplies the flat list of file paths under a root directory. Only files
//! are yielded; directories are traversed but never returned.

use anyhow::Result;
use ignore::WalkBuilder;
use log::warn;
use std::path::{Path, PathBuf};

/// Lists every file reachable under `root`, sorted by path.
///
/// When `respect_gitignore` is true, gitignore rules and hidden files are
/// honored; when false the walk visits everything. Entries that cannot be
/// read are logged and skipped.
pub fn list_files(root: &Path, respect_gitignore: bool) -> Result<Vec<PathBuf>> {
    let mut builder = WalkBuilder::new(root);
    builder.git_ignore(respect_gitignore);
    builder.hidden(respect_gitignore);
    if !respect_gitignore {
        builder.ignore(false);
        builder.git_exclude(false);
        builder.git_global(false);
    }

    let mut files = Vec::new();
    for entry in builder.build() {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() {
                    files.push(path.to_path_buf());
                }
            }
            Err(err) => {
                warn!(target: "walk", "error walking {}: {}", root.display(), err);
            }
        }
    }

    // Deterministic target order for the scan
    files.sort();
    Ok(files)
}
