//! Interned identifier text with O(1) equality and cloning.

use lasso::ThreadedRodeo;
use serde::{Deserialize, Serialize};

/// A handle to the interned text of an identifier.
///
/// Every declaration and reference name in an exported program model is
/// interned once; comparing two `Ident`s compares `u32` indices, not string
/// contents. The convention engine resolves the text back only at the point
/// where it actually inspects characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Ident(u32);

impl Ident {
    /// Creates an `Ident` from a raw `u32` index.
    ///
    /// Intended for deserialization and tests; normal code obtains idents
    /// through [`Interner::get_or_intern`].
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw `u32` index of this identifier.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

// SAFETY: `Ident` wraps a `u32`, which always fits in `usize` on supported
// platforms, and `try_from_usize` rejects indices wider than `u32`.
unsafe impl lasso::Key for Ident {
    fn into_usize(self) -> usize {
        self.0 as usize
    }

    fn try_from_usize(int: usize) -> Option<Self> {
        u32::try_from(int).ok().map(Ident)
    }
}

/// Thread-safe string interner for identifier text.
///
/// Backed by [`lasso::ThreadedRodeo`] so the lint engine can resolve names
/// from rayon worker threads without synchronization on the caller's side.
#[derive(Debug)]
pub struct Interner {
    rodeo: ThreadedRodeo<Ident>,
}

impl Interner {
    /// Creates a new empty interner.
    pub fn new() -> Self {
        Self {
            rodeo: ThreadedRodeo::new(),
        }
    }

    /// Interns a string, returning its [`Ident`]. Re-interning the same
    /// text returns the existing handle without allocating.
    pub fn get_or_intern(&self, s: &str) -> Ident {
        self.rodeo.get_or_intern(s)
    }

    /// Returns the [`Ident`] for `s` if it has already been interned.
    pub fn get(&self, s: &str) -> Option<Ident> {
        self.rodeo.get(s)
    }

    /// Resolves an [`Ident`] back to its text.
    ///
    /// # Panics
    ///
    /// Panics if the `Ident` was not created by this interner.
    pub fn resolve(&self, ident: Ident) -> &str {
        self.rodeo.resolve(&ident)
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}
