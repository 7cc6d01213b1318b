//! Match-span highlighting.
//!
//! Wraps a matched substring with start and end markers. The markers are
//! carried by [`HighlightStyle`] so callers can swap the terminal escapes
//! for plain delimiters in tests or non-terminal output.

use serde::{Deserialize, Serialize};

const ANSI_RED_BOLD: &str = "\x1b[1;31m";
const ANSI_RESET: &str = "\x1b[0m";

/// Marker pair placed around a matched span.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HighlightStyle {
    /// Marker inserted before the matched substring
    pub start: String,
    /// Marker inserted after the matched substring
    pub end: String,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            start: ANSI_RED_BOLD.to_string(),
            end: ANSI_RESET.to_string(),
        }
    }
}

impl HighlightStyle {
    /// A style with explicit markers, mainly for tests and plain output.
    pub fn with_markers(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Returns `line` with the byte range `[start, end)` wrapped by the style's
/// markers.
///
/// Offsets follow the same convention as the regex match that produced
/// them: byte positions on UTF-8 character boundaries, with
/// `0 <= start <= end <= line.len()`.
pub fn wrap_span(line: &str, start: usize, end: usize, style: &HighlightStyle) -> String {
    let mut wrapped =
        String::with_capacity(line.len() + style.start.len() + style.end.len());
    wrapped.push_str(&line[..start]);
    wrapped.push_str(&style.start);
    wrapped.push_str(&line[start..end]);
    wrapped.push_str(&style.end);
    wrapped.push_str(&line[end..]);
    wrapped
}
