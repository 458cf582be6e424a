//! Source text management and span tracking for analyzed programs.
//!
//! The host compiler exports the source files it compiled; this crate holds
//! that text in a [`SourceDb`], addresses it with [`FileId`] and [`Span`],
//! and resolves byte offsets to 1-indexed [`ResolvedSpan`] coordinates for
//! diagnostic rendering. A `SourceDb` is an immutable snapshot: the rename
//! engine never edits one in place, it derives a replacement with
//! [`SourceDb::with_file_content`].

#![warn(missing_docs)]

pub mod file_id;
pub mod resolved_span;
pub mod source_db;
pub mod source_file;
pub mod span;

pub use file_id::FileId;
pub use resolved_span::ResolvedSpan;
pub use source_db::SourceDb;
pub use source_file::SourceFile;
pub use span::Span;
