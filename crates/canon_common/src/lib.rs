//! Shared foundational types used across the Canon analysis toolchain.
//!
//! This crate provides interned identifiers, content hashing for snapshot
//! identity, and cooperative cancellation, shared by every other crate in
//! the workspace.

#![warn(missing_docs)]

pub mod cancel;
pub mod hash;
pub mod ident;

pub use cancel::CancelToken;
pub use hash::ContentHash;
pub use ident::{Ident, Interner};
