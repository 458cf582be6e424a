//! The exported symbol model a host compiler hands to the analyzer.
//!
//! Canon does not parse or type-check the analyzed language. The host
//! compiler exports the facts the rules consume — per declaration: the
//! identifier text, the declared visibility, whether it is a compile-time
//! constant, and the source location — plus the reference sites a rename
//! must rewrite. This crate holds those facts in an immutable [`Program`]
//! snapshot and defines the [`ReferenceSource`] collaborator trait through
//! which the rename engine enumerates use sites.

#![warn(missing_docs)]

pub mod arena;
pub mod declaration;
pub mod ids;
pub mod import;
pub mod program;
pub mod reference;

pub use arena::{Arena, ArenaId};
pub use declaration::{DeclKind, Declaration, Visibility};
pub use ids::{DeclId, ScopeId};
pub use import::{DeclDump, FileDump, ImportError, ProgramDump, RefDump};
pub use program::Program;
pub use reference::{Reference, ReferenceError, ReferenceSource};
