//! Checking declarations against their prescribed convention.

use crate::convention::{canonicalize, NamingConvention};
use canon_common::Interner;
use canon_model::{DeclId, Declaration, Visibility};
use canon_source::Span;

/// A mismatch between a declaration's actual and canonical identifier.
///
/// Value object: created by [`check_declaration`], consumed once by the
/// reporting rule, never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConventionViolation {
    /// The offending declaration.
    pub decl: DeclId,
    /// The span of the identifier token at the declaration site.
    pub span: Span,
    /// The identifier as written.
    pub actual: String,
    /// The identifier the convention prescribes.
    pub suggested: String,
    /// The convention that was applied.
    pub convention: NamingConvention,
}

/// Selects the convention for a declaration's visibility.
///
/// Private declarations follow `LeadingUnderscoreCamelCase`; every other
/// visibility follows `PascalCase`. Exactly one convention applies per
/// visibility, with no further configuration.
pub fn convention_for(visibility: Visibility) -> NamingConvention {
    if visibility.is_private() {
        NamingConvention::LeadingUnderscoreCamelCase
    } else {
        NamingConvention::PascalCase
    }
}

/// Checks one declaration, returning a violation iff its name is not
/// canonical under the convention its visibility selects.
///
/// Constants are exempt regardless of spelling. Identifiers that are empty
/// or whitespace, or whose canonical form would be empty (a bare `_` under
/// PascalCase), are malformed input from the declaration source; the check
/// is skipped for them rather than surfaced as an error.
pub fn check_declaration(
    decl: &Declaration,
    interner: &Interner,
) -> Option<ConventionViolation> {
    if decl.is_const {
        return None;
    }
    let actual = interner.resolve(decl.name);
    if actual.trim().is_empty() {
        return None;
    }
    let convention = convention_for(decl.visibility);
    let suggested = canonicalize(actual, convention);
    if suggested.is_empty() || suggested == actual {
        return None;
    }
    Some(ConventionViolation {
        decl: decl.id,
        span: decl.span,
        actual: actual.to_string(),
        suggested,
        convention,
    })
}
