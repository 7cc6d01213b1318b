//! Include/exclude classification of candidate file paths.
//!
//! Patterns use the wildcard syntax of [`crate::glob`] and are applied to
//! the whole path string, so `*.rs` matches `src/main.rs` as well as
//! `main.rs`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::glob::glob_match;

/// Narrows a path list through include and exclude patterns.
///
/// A path survives when it matches at least one include pattern and no
/// exclude pattern. An empty include set behaves like a single `*` pattern
/// and includes everything; an empty exclude set excludes nothing. A path
/// matching both an include and an exclude pattern is excluded.
///
/// The original path order is preserved and duplicate paths are dropped.
pub fn filter_paths(
    paths: &[PathBuf],
    include_globs: &[String],
    exclude_globs: &[String],
) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut filtered = Vec::new();

    for path in paths {
        let name = normalized(path);

        let included = include_globs.is_empty()
            || include_globs.iter().any(|pattern| glob_match(&name, pattern));
        if !included {
            continue;
        }

        if exclude_globs.iter().any(|pattern| glob_match(&name, pattern)) {
            continue;
        }

        if seen.insert(path.clone()) {
            filtered.push(path.clone());
        }
    }

    filtered
}

/// Pattern matching runs on `/`-separated strings on every platform.
fn normalized(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
