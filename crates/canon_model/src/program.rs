//! The immutable program snapshot.

use crate::arena::Arena;
use crate::declaration::Declaration;
use crate::ids::{DeclId, ScopeId};
use crate::reference::{Reference, ReferenceError, ReferenceSource};
use canon_common::{CancelToken, Ident};
use canon_source::SourceDb;

/// A complete exported program: declarations, reference sites, and the
/// source text they point into.
///
/// A `Program` is an immutable snapshot. Nothing in this crate or its
/// consumers edits one in place; the rename engine clones it, rewrites the
/// clone, and returns the clone as the next snapshot. Two renames issued
/// against the same snapshot are the host's coordination problem, not ours.
#[derive(Clone, Debug)]
pub struct Program {
    /// All declarations, keyed by [`DeclId`].
    pub decls: Arena<DeclId, Declaration>,
    /// All reference sites, in export order.
    pub references: Vec<Reference>,
    /// The source text of the snapshot.
    pub sources: SourceDb,
}

impl Program {
    /// Creates an empty program over an empty source database.
    pub fn new() -> Self {
        Self {
            decls: Arena::new(),
            references: Vec::new(),
            sources: SourceDb::new(),
        }
    }

    /// Returns the declaration with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id does not belong to this program.
    pub fn decl(&self, id: DeclId) -> &Declaration {
        self.decls.get(id)
    }

    /// Returns the number of declarations.
    pub fn decl_count(&self) -> usize {
        self.decls.len()
    }

    /// Iterates over all reference sites that resolve to `decl`.
    pub fn references_of(&self, decl: DeclId) -> impl Iterator<Item = &Reference> {
        self.references.iter().filter(move |r| r.decl == decl)
    }

    /// Looks for a declaration named `name` in `scope`, ignoring
    /// `excluding`.
    ///
    /// This is the collision question a rename asks: would binding `name`
    /// in this scope collide with something that already exists there?
    pub fn binding_in_scope(
        &self,
        scope: ScopeId,
        name: Ident,
        excluding: DeclId,
    ) -> Option<DeclId> {
        self.decls
            .iter()
            .find(|(id, d)| *id != excluding && d.scope == scope && d.name == name)
            .map(|(id, _)| id)
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceSource for Program {
    /// Walks the exported reference table, polling the token between
    /// entries so a cancel request takes effect mid-walk.
    fn references_to(
        &self,
        decl: DeclId,
        cancel: &CancelToken,
    ) -> Result<Vec<Reference>, ReferenceError> {
        let mut out = Vec::new();
        for reference in &self.references {
            if cancel.is_cancelled() {
                return Err(ReferenceError::Cancelled);
            }
            if reference.decl == decl {
                out.push(*reference);
            }
        }
        Ok(out)
    }
}
