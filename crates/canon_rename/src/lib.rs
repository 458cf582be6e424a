//! Program-wide, collision-safe renaming over immutable snapshots.
//!
//! A rename is a single-shot request/response: [`SafeRenamer::plan`]
//! computes the canonical new name, checks it against the target scope for
//! collisions, and enumerates every reference through the
//! [`ReferenceSource`](canon_model::ReferenceSource) collaborator;
//! [`SafeRenamer::apply`] then rewrites the declaration and all references
//! as one logical edit, producing a new [`Program`](canon_model::Program)
//! snapshot. The input snapshot is never touched — on any failure the
//! caller still holds it, byte for byte.

#![warn(missing_docs)]

pub mod apply;
pub mod error;
pub mod plan;
pub mod renamer;

pub use error::RenameError;
pub use plan::RenamePlan;
pub use renamer::{RenameOutcome, SafeRenamer};
