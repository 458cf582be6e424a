//! Spans resolved to human-readable line/column coordinates.

use std::fmt;
use std::path::PathBuf;

/// A span resolved to 1-indexed line/column coordinates for display.
///
/// Produced by [`SourceDb::resolve_span`](crate::SourceDb::resolve_span);
/// the `Display` form is the familiar `path:line:col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSpan {
    /// The path of the source file.
    pub file_path: PathBuf,
    /// The starting line number (1-indexed).
    pub start_line: u32,
    /// The starting column number (1-indexed).
    pub start_col: u32,
    /// The ending line number (1-indexed).
    pub end_line: u32,
    /// The ending column number (1-indexed).
    pub end_col: u32,
}

impl fmt::Display for ResolvedSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.file_path.display(),
            self.start_line,
            self.start_col
        )
    }
}
