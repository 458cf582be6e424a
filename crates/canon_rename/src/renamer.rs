//! The safe renamer: plan, collision pre-flight, and atomic application.

use crate::apply::apply_plan;
use crate::error::RenameError;
use crate::plan::RenamePlan;
use canon_common::{CancelToken, Interner};
use canon_model::{DeclId, Program, ReferenceSource};
use canon_naming::{canonicalize, convention_for};

/// The result of a successful rename.
#[derive(Debug)]
pub struct RenameOutcome {
    /// The rewritten snapshot. The input snapshot is untouched.
    pub program: Program,
    /// How many sites were rewritten (declaration plus references);
    /// zero when the name was already canonical.
    pub replaced: usize,
}

/// Plans and applies collision-safe renames against one program snapshot.
///
/// A renamer borrows its snapshot; each [`rename`](Self::rename) call is a
/// single-shot request producing a fresh snapshot. Coordinating renames
/// issued concurrently against the same live snapshot is the host's
/// version-model problem, not this engine's.
pub struct SafeRenamer<'a, R: ReferenceSource> {
    program: &'a Program,
    interner: &'a Interner,
    references: &'a R,
}

impl<'a> SafeRenamer<'a, Program> {
    /// Creates a renamer that enumerates references from the snapshot's own
    /// exported reference table.
    pub fn new(program: &'a Program, interner: &'a Interner) -> Self {
        Self {
            program,
            interner,
            references: program,
        }
    }
}

impl<'a, R: ReferenceSource> SafeRenamer<'a, R> {
    /// Creates a renamer with an explicit reference-resolution collaborator.
    pub fn with_reference_source(
        program: &'a Program,
        interner: &'a Interner,
        references: &'a R,
    ) -> Self {
        Self {
            program,
            interner,
            references,
        }
    }

    /// Plans the canonical rename for `decl`.
    ///
    /// The new name is always derived through [`canonicalize`] from the
    /// convention the declaration's visibility selects; callers cannot
    /// inject an arbitrary spelling. Fails without side effects on an
    /// invalid identifier, a scope collision, a collaborator failure, or
    /// cancellation.
    pub fn plan(&self, decl: DeclId, cancel: &CancelToken) -> Result<RenamePlan, RenameError> {
        let declaration = self.program.decl(decl);
        let old_name = self.interner.resolve(declaration.name).to_string();
        if !is_well_formed(&old_name) {
            return Err(RenameError::InvalidIdentifier { name: old_name });
        }
        let new_name = canonicalize(&old_name, convention_for(declaration.visibility));
        self.plan_to(decl, old_name, new_name, cancel)
    }

    fn plan_to(
        &self,
        decl: DeclId,
        old_name: String,
        new_name: String,
        cancel: &CancelToken,
    ) -> Result<RenamePlan, RenameError> {
        if !is_well_formed(&new_name) {
            return Err(RenameError::InvalidIdentifier { name: new_name });
        }

        let declaration = self.program.decl(decl);
        if new_name != old_name {
            // Pre-flight collision check: only a name that has been interned
            // can already be bound somewhere.
            if let Some(existing_ident) = self.interner.get(&new_name) {
                if let Some(existing) =
                    self.program
                        .binding_in_scope(declaration.scope, existing_ident, decl)
                {
                    return Err(RenameError::NameCollision {
                        name: new_name,
                        existing: self.program.decl(existing).span,
                    });
                }
            }
        }

        let references = self.references.references_to(decl, cancel)?;
        let mut sites = Vec::with_capacity(references.len() + 1);
        sites.push(declaration.span);
        sites.extend(references.iter().map(|r| r.span));

        Ok(RenamePlan {
            decl,
            old_name,
            new_name,
            sites,
        })
    }

    /// Applies a plan, producing the rewritten snapshot.
    ///
    /// A no-op plan (name already canonical) returns a clone of the input
    /// snapshot with `replaced == 0`.
    pub fn apply(&self, plan: &RenamePlan) -> Result<RenameOutcome, RenameError> {
        if plan.is_noop() {
            return Ok(RenameOutcome {
                program: self.program.clone(),
                replaced: 0,
            });
        }
        let program = apply_plan(self.program, self.interner, plan)?;
        Ok(RenameOutcome {
            program,
            replaced: plan.site_count(),
        })
    }

    /// Plans and applies the canonical rename for `decl` in one step.
    pub fn rename(&self, decl: DeclId, cancel: &CancelToken) -> Result<RenameOutcome, RenameError> {
        let plan = self.plan(decl, cancel)?;
        self.apply(&plan)
    }
}

/// A well-formed identifier: non-empty, starts with a letter or underscore,
/// and contains only letters, digits, and underscores.
fn is_well_formed(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        None => return false,
        Some(first) if first != '_' && !first.is_alphabetic() => return false,
        Some(_) => {}
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}
