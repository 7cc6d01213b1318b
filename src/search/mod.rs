//! File content searching over line-oriented text.
//!
//! This module provides the scanning engine: it compiles the search
//! pattern once, expands and filters the file target list, then scans each
//! file line by line applying the invert-adjusted match test, with
//! optional highlighting and context windows around matching lines.

use anyhow::{Context, Result};
use log::warn;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::filter::filter_paths;
use crate::highlight::{self, HighlightStyle};
use crate::walk;

/// Configuration options for one search invocation.
pub struct SearchOptions {
    /// Whether matching ignores letter case.
    pub case_insensitive: bool,

    /// Whether the pattern must be flanked by word boundaries on both
    /// sides, so `cat` matches the word `cat` but not `concatenate`.
    pub whole_word: bool,

    /// Whether to select lines that do NOT match the pattern.
    pub invert: bool,

    /// Whether to suppress per-line results and report only the total
    /// number of matching lines.
    pub count_only: bool,

    /// Whether rendered results carry 1-based line numbers.
    pub line_numbers: bool,

    /// Whether the matched substring is wrapped with the highlight
    /// markers. Has no effect on inverted matches, which carry no span.
    pub highlight: bool,

    /// Number of context lines emitted before and after each matching
    /// line. Zero disables context.
    pub context_lines: usize,

    /// Whether the target list is replaced by a recursive walk rooted at
    /// the first target (or the current directory when none is given).
    pub recursive: bool,

    /// Whether recursive walks respect gitignore rules and skip hidden
    /// files.
    pub respect_gitignore: bool,

    /// Wildcard patterns a target path must match to be searched.
    /// An empty list includes every target.
    pub include_globs: Vec<String>,

    /// Wildcard patterns that remove target paths from the search.
    /// Exclusion wins over inclusion.
    pub exclude_globs: Vec<String>,

    /// Marker pair used when `highlight` is set.
    pub highlight_style: HighlightStyle,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            whole_word: false,
            invert: false,
            count_only: false,
            line_numbers: false,
            highlight: false,
            context_lines: 0,
            recursive: false,
            respect_gitignore: true,
            include_globs: Vec::new(),
            exclude_globs: Vec::new(),
            highlight_style: HighlightStyle::default(),
        }
    }
}

/// A single emitted line: either a match or a context line around one.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SearchResultLine {
    /// Path of the file containing the line
    pub file_path: PathBuf,

    /// Line number within the file (1-based)
    pub line_number: u64,

    /// Content of the line, with highlight markers applied when requested
    pub line_content: String,

    /// Byte offsets of the first match within the original line. `None`
    /// for inverted matches and context lines.
    pub span: Option<(usize, usize)>,

    /// Whether this line is context around a match rather than a match
    pub is_context: bool,
}

impl SearchResultLine {
    /// Renders the line in the textual output format: `path: text`, or
    /// `path:N: text` with line numbers. Context lines are always
    /// numbered and indented to stand apart from matches.
    pub fn render(&self, line_numbers: bool) -> String {
        if self.is_context {
            format!(
                "  {}:{}: {}",
                self.file_path.display(),
                self.line_number,
                self.line_content
            )
        } else if line_numbers {
            format!(
                "{}:{}: {}",
                self.file_path.display(),
                self.line_number,
                self.line_content
            )
        } else {
            format!("{}: {}", self.file_path.display(), self.line_content)
        }
    }
}

/// All lines emitted by one search invocation, in file-target order and
/// ascending line order within each file.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SearchResults {
    /// Matches and their context lines
    pub lines: Vec<SearchResultLine>,

    /// Number of matching lines across all files. Context lines are not
    /// counted. Populated even when `count_only` suppresses `lines`.
    pub matched_line_count: usize,
}

/// Searches the given file targets for the pattern.
///
/// # Arguments
///
/// * `pattern` - The regular expression pattern to search for
/// * `targets` - File paths to scan; in recursive mode the first entry is
///   the walk root instead
/// * `options` - Configuration options for the search operation
///
/// # Returns
///
/// The emitted result lines and the total count of matching lines.
///
/// # Errors
///
/// Returns an error if the pattern does not compile. A target that cannot
/// be read is not an error: a diagnostic is printed, the file is skipped,
/// and the search continues.
pub fn search_files(
    pattern: &str,
    targets: &[PathBuf],
    options: &SearchOptions,
) -> Result<SearchResults> {
    let matcher = build_matcher(pattern, options)?;
    let targets = collect_targets(targets, options)?;

    let mut results = SearchResults::default();
    for path in &targets {
        scan_file(path, &matcher, options, &mut results);
    }

    Ok(results)
}

/// Compiles the pattern, applying the whole-word wrapping and the case
/// flag.
fn build_matcher(pattern: &str, options: &SearchOptions) -> Result<Regex> {
    let effective = if options.whole_word {
        format!(r"\b(?:{pattern})\b")
    } else {
        pattern.to_string()
    };

    RegexBuilder::new(&effective)
        .case_insensitive(options.case_insensitive)
        .build()
        .with_context(|| format!("invalid search pattern `{pattern}`"))
}

/// Builds the final target list: a recursive walk when requested,
/// otherwise the explicit targets, narrowed through the include/exclude
/// filters either way.
fn collect_targets(targets: &[PathBuf], options: &SearchOptions) -> Result<Vec<PathBuf>> {
    let candidates = if options.recursive {
        let root = targets
            .first()
            .map(PathBuf::as_path)
            .unwrap_or_else(|| Path::new("."));
        walk::list_files(root, options.respect_gitignore)?
    } else {
        targets.to_vec()
    };

    Ok(filter_paths(
        &candidates,
        &options.include_globs,
        &options.exclude_globs,
    ))
}

/// Scans one file, appending its matches and context lines to `results`.
///
/// The file is read fully so that context lines before and after a match
/// can be addressed by index.
fn scan_file(path: &Path, matcher: &Regex, options: &SearchOptions, results: &mut SearchResults) {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            report_unreadable(path, &err);
            return;
        }
    };

    let lines: Vec<&str> = content.lines().collect();
    let spans: Vec<Option<(usize, usize)>> = lines
        .iter()
        .map(|line| matcher.find(line).map(|found| (found.start(), found.end())))
        .collect();

    // A line qualifies when the match test agrees with the invert flag.
    // In invert mode a qualifying line necessarily has no span.
    let qualifies: Vec<bool> = spans
        .iter()
        .map(|span| span.is_some() != options.invert)
        .collect();

    results.matched_line_count += qualifies.iter().filter(|&&q| q).count();
    if options.count_only {
        return;
    }

    let in_context = context_window(&qualifies, options.context_lines);

    for (index, line) in lines.iter().enumerate() {
        if qualifies[index] {
            let span = spans[index];
            let line_content = match span {
                Some((start, end)) if options.highlight => {
                    highlight::wrap_span(line, start, end, &options.highlight_style)
                }
                _ => (*line).to_string(),
            };
            results.lines.push(SearchResultLine {
                file_path: path.to_path_buf(),
                line_number: (index + 1) as u64,
                line_content,
                span,
                is_context: false,
            });
        } else if in_context[index] {
            results.lines.push(SearchResultLine {
                file_path: path.to_path_buf(),
                line_number: (index + 1) as u64,
                line_content: (*line).to_string(),
                span: None,
                is_context: true,
            });
        }
    }
}

/// Marks the lines falling inside a context window of `k` lines around
/// any qualifying line. Windows are clipped to file bounds and merged
/// where they overlap; qualifying lines themselves are never marked.
fn context_window(qualifies: &[bool], k: usize) -> Vec<bool> {
    let mut in_window = vec![false; qualifies.len()];
    if k == 0 || qualifies.is_empty() {
        return in_window;
    }

    let last = qualifies.len() - 1;
    for (index, &qualifying) in qualifies.iter().enumerate() {
        if !qualifying {
            continue;
        }
        for neighbor in index.saturating_sub(k)..=(index + k).min(last) {
            if !qualifies[neighbor] {
                in_window[neighbor] = true;
            }
        }
    }

    in_window
}

/// Diagnoses a target that cannot be read and leaves the run to continue
/// with the next one.
fn report_unreadable(path: &Path, err: &io::Error) {
    let reason = if err.kind() == io::ErrorKind::NotFound {
        "No such file or directory".to_string()
    } else {
        err.to_string()
    };
    eprintln!("grep: {}: {}", path.display(), reason);
    warn!(target: "search", "skipping {}: {}", path.display(), err);
}
