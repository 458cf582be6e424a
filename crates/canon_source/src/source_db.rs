//! The immutable snapshot of all source text in an analyzed program.

use crate::file_id::FileId;
use crate::resolved_span::ResolvedSpan;
use crate::source_file::SourceFile;
use crate::span::Span;
use std::io;
use std::path::{Path, PathBuf};

/// All source files of one program snapshot.
///
/// The database owns the text and resolves [`Span`]s to line/column
/// coordinates. It is never edited in place: the rename engine derives a new
/// snapshot with [`with_file_content`](Self::with_file_content), leaving the
/// original addressable by anything still holding it.
#[derive(Clone, Debug)]
pub struct SourceDb {
    files: Vec<SourceFile>,
}

impl SourceDb {
    /// Creates an empty source database.
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Loads a source file from disk and returns its [`FileId`].
    pub fn load_file(&mut self, path: &Path) -> Result<FileId, io::Error> {
        let content = std::fs::read_to_string(path)?;
        Ok(self.add_source(path.to_path_buf(), content))
    }

    /// Adds a source file from an in-memory string.
    ///
    /// The `name` is used as the file path in diagnostics.
    pub fn add_source(&mut self, name: impl Into<PathBuf>, content: String) -> FileId {
        let id = FileId::from_raw(self.files.len() as u32);
        self.files.push(SourceFile::new(id, name.into(), content));
        id
    }

    /// Returns the [`SourceFile`] for the given [`FileId`].
    ///
    /// # Panics
    ///
    /// Panics if the `FileId` does not belong to this database.
    pub fn get_file(&self, id: FileId) -> &SourceFile {
        &self.files[id.as_raw() as usize]
    }

    /// Returns the number of files in this snapshot.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Iterates over all files in load order.
    pub fn files(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter()
    }

    /// Returns a new snapshot with one file's text replaced.
    ///
    /// File ids and paths are preserved; line indexing and the content hash
    /// of the replaced file are recomputed. `self` is unchanged.
    pub fn with_file_content(&self, id: FileId, content: String) -> SourceDb {
        let mut files = self.files.clone();
        let idx = id.as_raw() as usize;
        files[idx] = SourceFile::new(id, files[idx].path.clone(), content);
        SourceDb { files }
    }

    /// Resolves a [`Span`] to 1-indexed line/column coordinates.
    pub fn resolve_span(&self, span: Span) -> ResolvedSpan {
        let file = self.get_file(span.file);
        let (start_line, start_col) = file.line_col(span.start);
        let (end_line, end_col) = file.line_col(span.end.saturating_sub(1).max(span.start));
        ResolvedSpan {
            file_path: file.path.clone(),
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Returns the source text a [`Span`] covers.
    pub fn snippet(&self, span: Span) -> &str {
        self.get_file(span.file).snippet(span.start, span.end)
    }
}

impl Default for SourceDb {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_get() {
        let mut db = SourceDb::new();
        let id = db.add_source("Order.cs", "class Order { }".to_string());
        assert_eq!(db.get_file(id).path, PathBuf::from("Order.cs"));
        assert_eq!(db.file_count(), 1);
    }

    #[test]
    fn snippet_for_span() {
        let mut db = SourceDb::new();
        let id = db.add_source("a.cs", "private int m_total;".to_string());
        let span = Span::new(id, 12, 19);
        assert_eq!(db.snippet(span), "m_total");
    }

    #[test]
    fn resolve_span_line_col() {
        let mut db = SourceDb::new();
        let id = db.add_source("a.cs", "class A {\n  int _n;\n}\n".to_string());
        let span = Span::new(id, 16, 18);
        let resolved = db.resolve_span(span);
        assert_eq!(resolved.start_line, 2);
        assert_eq!(resolved.start_col, 7);
    }

    #[test]
    fn with_file_content_leaves_original_untouched() {
        let mut db = SourceDb::new();
        let id = db.add_source("a.cs", "int m_x;".to_string());
        let original_hash = db.get_file(id).content_hash;

        let next = db.with_file_content(id, "int _x;".to_string());

        assert_eq!(db.get_file(id).content, "int m_x;");
        assert_eq!(db.get_file(id).content_hash, original_hash);
        assert_eq!(next.get_file(id).content, "int _x;");
        assert_ne!(next.get_file(id).content_hash, original_hash);
        // Path and id carry over
        assert_eq!(next.get_file(id).path, PathBuf::from("a.cs"));
        assert_eq!(next.get_file(id).id, id);
    }

    #[test]
    fn with_file_content_keeps_other_files() {
        let mut db = SourceDb::new();
        let a = db.add_source("a.cs", "aaa".to_string());
        let b = db.add_source("b.cs", "bbb".to_string());
        let next = db.with_file_content(a, "zzz".to_string());
        assert_eq!(next.get_file(b).content, "bbb");
        assert_eq!(next.get_file(b).content_hash, db.get_file(b).content_hash);
    }
}
