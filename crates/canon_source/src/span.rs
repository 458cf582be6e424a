//! Byte ranges locating identifiers and declarations in source text.

use crate::file_id::FileId;
use serde::{Deserialize, Serialize};

/// A byte range within a single source file. `start` is inclusive, `end`
/// exclusive.
///
/// Declaration sites, reference sites, and diagnostic locations are all
/// spans. For identifier tokens the span covers exactly the identifier
/// text, which is what the rename engine splices out.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Span {
    /// The source file this span belongs to.
    pub file: FileId,
    /// Byte offset of the start of the span (inclusive).
    pub start: u32,
    /// Byte offset of the end of the span (exclusive).
    pub end: u32,
}

impl Span {
    /// A dummy span for entities with no source location.
    pub const DUMMY: Span = Span {
        file: FileId::DUMMY,
        start: 0,
        end: 0,
    };

    /// Creates a new span in the given file over the given byte range.
    pub fn new(file: FileId, start: u32, end: u32) -> Self {
        Self { file, start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if this span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if this is the dummy span.
    pub fn is_dummy(&self) -> bool {
        self.file == FileId::DUMMY
    }

    /// Returns a copy of this span shifted by a signed byte delta.
    ///
    /// Used when a rename rewrites text earlier in the same file and every
    /// later span moves by the accumulated size difference.
    pub fn shifted(self, delta: i64) -> Span {
        Span {
            file: self.file,
            start: (self.start as i64 + delta) as u32,
            end: (self.end as i64 + delta) as u32,
        }
    }
}
