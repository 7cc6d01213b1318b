//! # Linegrep
//!
//! Linegrep is a line-oriented text search tool for local files.
//!
//! ## Features
//!
//! * Pattern search - Scan files line by line for regex matches, with
//!   case-insensitive, whole-word, and inverted matching
//! * Context windows - Emit surrounding lines around each matching line
//! * Path filtering - Narrow the file list with `*`/`?` include and exclude
//!   patterns, optionally expanded by recursive directory traversal

/// Include/exclude classification of candidate file paths
pub mod filter;
/// Wildcard filename matching with `*` and `?`
pub mod glob;
/// Match-span wrapping with configurable markers
pub mod highlight;
/// Line scanning engine and search options
pub mod search;
/// Logging configuration
pub mod telemetry;
/// Recursive file listing
pub mod walk;
