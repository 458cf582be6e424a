//! Import of JSON symbol dumps exported by a host compiler.
//!
//! The dump is the serialization boundary: names travel as plain strings
//! and are interned on import, spans travel as `(file, start, end)` triples
//! and are validated against the shipped source text.

use crate::declaration::{DeclKind, Declaration, Visibility};
use crate::ids::{DeclId, ScopeId};
use crate::program::Program;
use crate::reference::Reference;
use canon_common::Interner;
use canon_source::{FileId, Span};
use serde::{Deserialize, Serialize};

/// A source file as it appears in a symbol dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileDump {
    /// The path the host compiler reported.
    pub path: String,
    /// The full file content.
    pub content: String,
}

/// A declaration as it appears in a symbol dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeclDump {
    /// The identifier text.
    pub name: String,
    /// The declaration kind.
    pub kind: DeclKind,
    /// The declared visibility.
    pub visibility: Visibility,
    /// Whether the visibility was spelled out in source.
    #[serde(default = "default_true")]
    pub explicit_visibility: bool,
    /// Whether this is a compile-time constant.
    #[serde(default)]
    pub is_const: bool,
    /// The flattened scope id.
    pub scope: u32,
    /// Index into `files` of the declaring file.
    pub file: u32,
    /// Byte offset of the identifier token start.
    pub start: u32,
    /// Byte offset of the identifier token end.
    pub end: u32,
}

/// A reference site as it appears in a symbol dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefDump {
    /// Index into `decls` of the referenced declaration.
    pub decl: u32,
    /// Index into `files` of the referring file.
    pub file: u32,
    /// Byte offset of the identifier token start.
    pub start: u32,
    /// Byte offset of the identifier token end.
    pub end: u32,
}

/// The root of a symbol dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramDump {
    /// All source files, indexed by the `file` fields below.
    pub files: Vec<FileDump>,
    /// All declarations, indexed by `RefDump::decl`.
    pub decls: Vec<DeclDump>,
    /// All reference sites.
    #[serde(default)]
    pub references: Vec<RefDump>,
}

/// Errors detected while turning a dump into a [`Program`].
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The dump was not valid JSON for the expected shape.
    #[error("failed to parse symbol dump: {0}")]
    Parse(String),

    /// A `file` index pointed past the `files` table.
    #[error("declaration '{name}' refers to unknown file index {file}")]
    UnknownFile {
        /// The declaration's identifier.
        name: String,
        /// The out-of-range file index.
        file: u32,
    },

    /// A span did not lie within its file, or did not cover the identifier.
    #[error("span {start}..{end} of '{name}' does not match the source text")]
    SpanMismatch {
        /// The expected identifier.
        name: String,
        /// Span start offset.
        start: u32,
        /// Span end offset.
        end: u32,
    },

    /// A reference pointed at a declaration index past the `decls` table.
    #[error("reference refers to unknown declaration index {0}")]
    DanglingDecl(u32),
}

impl ProgramDump {
    /// Parses a dump from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        serde_json::from_str(json).map_err(|e| ImportError::Parse(e.to_string()))
    }

    /// Builds a [`Program`], interning names through `interner` and
    /// validating every span against the shipped source text.
    pub fn into_program(self, interner: &Interner) -> Result<Program, ImportError> {
        let mut program = Program::new();

        let mut file_ids = Vec::with_capacity(self.files.len());
        for file in self.files {
            file_ids.push(program.sources.add_source(file.path, file.content));
        }

        for (index, decl) in self.decls.into_iter().enumerate() {
            let file = resolve_file(&file_ids, decl.file, &decl.name)?;
            let span = Span::new(file, decl.start, decl.end);
            check_span_text(&program, span, &decl.name)?;
            program.decls.alloc(Declaration {
                id: DeclId::from_raw(index as u32),
                name: interner.get_or_intern(&decl.name),
                kind: decl.kind,
                visibility: decl.visibility,
                explicit_visibility: decl.explicit_visibility,
                is_const: decl.is_const,
                scope: ScopeId::from_raw(decl.scope),
                span,
            });
        }

        for reference in self.references {
            let decl = DeclId::from_raw(reference.decl);
            if !program.decls.contains(decl) {
                return Err(ImportError::DanglingDecl(reference.decl));
            }
            let name = interner.resolve(program.decl(decl).name).to_string();
            let file = resolve_file(&file_ids, reference.file, &name)?;
            let span = Span::new(file, reference.start, reference.end);
            check_span_text(&program, span, &name)?;
            program.references.push(Reference { decl, span });
        }

        Ok(program)
    }
}

fn default_true() -> bool {
    true
}

fn resolve_file(file_ids: &[FileId], index: u32, name: &str) -> Result<FileId, ImportError> {
    file_ids
        .get(index as usize)
        .copied()
        .ok_or_else(|| ImportError::UnknownFile {
            name: name.to_string(),
            file: index,
        })
}

/// Confirms that `span` lies within its file and covers exactly `name`.
fn check_span_text(program: &Program, span: Span, name: &str) -> Result<(), ImportError> {
    let content = &program.sources.get_file(span.file).content;
    let in_bounds = span.start <= span.end
        && (span.end as usize) <= content.len()
        && content.is_char_boundary(span.start as usize)
        && content.is_char_boundary(span.end as usize);
    if !in_bounds || &content[span.start as usize..span.end as usize] != name {
        return Err(ImportError::SpanMismatch {
            name: name.to_string(),
            start: span.start,
            end: span.end,
        });
    }
    Ok(())
}
