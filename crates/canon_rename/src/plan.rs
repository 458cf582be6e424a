//! Rename plans: the full set of sites one rename will touch.

use canon_diagnostics::Replacement;
use canon_model::DeclId;
use canon_source::Span;

/// Every source location one rename will rewrite, plus the name change
/// itself.
///
/// `sites` holds the declaration's identifier span and the span of every
/// reference, in no particular order. A plan is request-scoped: it is built
/// against one snapshot, applied (or discarded) against that same snapshot,
/// and never persisted.
#[derive(Clone, Debug)]
pub struct RenamePlan {
    /// The declaration being renamed.
    pub decl: DeclId,
    /// The identifier as currently written at every site.
    pub old_name: String,
    /// The identifier every site will be rewritten to.
    pub new_name: String,
    /// The declaration site plus all reference sites.
    pub sites: Vec<Span>,
}

impl RenamePlan {
    /// Returns the number of sites this plan touches (declaration included).
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// Returns `true` if the plan changes nothing (the name is already
    /// canonical).
    pub fn is_noop(&self) -> bool {
        self.old_name == self.new_name
    }

    /// Lowers the plan into diagnostic [`Replacement`]s, one per site, for
    /// attachment to a diagnostic as a suggested fix.
    pub fn replacements(&self) -> Vec<Replacement> {
        self.sites
            .iter()
            .map(|span| Replacement {
                span: *span,
                new_text: self.new_name.clone(),
            })
            .collect()
    }

    /// A short human-readable description of the rename, used as the fix
    /// message on diagnostics.
    pub fn describe(&self) -> String {
        format!("rename '{}' to '{}'", self.old_name, self.new_name)
    }
}
