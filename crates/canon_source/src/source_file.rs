//! A single exported source file with line indexing.

use crate::file_id::FileId;
use canon_common::ContentHash;
use std::path::PathBuf;

/// One source file of the analyzed program.
///
/// Line starts are precomputed at construction so diagnostic rendering can
/// resolve byte offsets to line/column pairs with a binary search. The
/// content hash identifies the exact text of this file; rename atomicity is
/// asserted by comparing hashes across snapshots.
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// The id of this file within its [`SourceDb`](crate::SourceDb).
    pub id: FileId,
    /// The path the host compiler reported for this file.
    pub path: PathBuf,
    /// The full text of the file.
    pub content: String,
    /// Byte offsets of each line start; the first entry is always 0.
    line_starts: Vec<u32>,
    /// Hash of `content`.
    pub content_hash: ContentHash,
}

impl SourceFile {
    /// Creates a new `SourceFile`, computing line starts and content hash.
    pub fn new(id: FileId, path: PathBuf, content: String) -> Self {
        let line_starts = compute_line_starts(&content);
        let content_hash = ContentHash::from_bytes(content.as_bytes());
        Self {
            id,
            path,
            content,
            line_starts,
            content_hash,
        }
    }

    /// Converts a byte offset into 1-indexed (line, column) coordinates.
    pub fn line_col(&self, byte_offset: u32) -> (u32, u32) {
        let line_idx = match self.line_starts.binary_search(&byte_offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let line = (line_idx as u32) + 1;
        let col = byte_offset - self.line_starts[line_idx] + 1;
        (line, col)
    }

    /// Returns the text between two byte offsets.
    pub fn snippet(&self, start: u32, end: u32) -> &str {
        &self.content[start as usize..end as usize]
    }
}

/// Computes the byte offset of each line start in `content`.
fn compute_line_starts(content: &str) -> Vec<u32> {
    let mut starts = vec![0u32];
    for (i, byte) in content.bytes().enumerate() {
        if byte == b'\n' {
            starts.push((i + 1) as u32);
        }
    }
    starts
}
