//! Declarations — the named entities the rules inspect.

use crate::ids::{DeclId, ScopeId};
use canon_common::Ident;
use canon_source::Span;
use serde::{Deserialize, Serialize};

/// The kind of a declared entity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    /// An instance or static field.
    Field,
    /// A property (accessor pair).
    Property,
    /// A method.
    Method,
    /// A local variable inside a method body.
    Local,
    /// A named type (class, struct, interface, enum).
    Type,
}

/// The declared visibility of an entity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Visible only within the declaring type.
    Private,
    /// Visible to the declaring type and its subtypes.
    Protected,
    /// Visible within the declaring assembly/module.
    Internal,
    /// Visible everywhere.
    Public,
}

impl Visibility {
    /// Returns `true` for [`Private`](Visibility::Private).
    ///
    /// The naming rules branch on exactly this: private declarations follow
    /// the leading-underscore convention, everything else PascalCase.
    pub fn is_private(self) -> bool {
        self == Visibility::Private
    }
}

/// One declaration exported by the host compiler.
///
/// Carries the four facts the convention engine consumes — identifier,
/// visibility, constancy, location — plus the scope id the collision check
/// needs and the explicit-modifier flag the practice rules inspect.
#[derive(Clone, Debug)]
pub struct Declaration {
    /// This declaration's id within the program.
    pub id: DeclId,
    /// The interned identifier text.
    pub name: Ident,
    /// What kind of entity this is.
    pub kind: DeclKind,
    /// The declared (or defaulted) visibility.
    pub visibility: Visibility,
    /// `false` if the source relied on the language's default visibility
    /// instead of spelling a modifier out.
    pub explicit_visibility: bool,
    /// `true` for compile-time constants, which are exempt from naming rules.
    pub is_const: bool,
    /// The scope this declaration is bound in.
    pub scope: ScopeId,
    /// The span of the identifier token at the declaration site.
    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_private_is_private() {
        assert!(Visibility::Private.is_private());
        assert!(!Visibility::Protected.is_private());
        assert!(!Visibility::Internal.is_private());
        assert!(!Visibility::Public.is_private());
    }

    #[test]
    fn kind_serde_uses_snake_case() {
        let json = serde_json::to_string(&DeclKind::Field).unwrap();
        assert_eq!(json, "\"field\"");
        let back: DeclKind = serde_json::from_str("\"local\"").unwrap();
        assert_eq!(back, DeclKind::Local);
    }

    #[test]
    fn visibility_serde_roundtrip() {
        for vis in [
            Visibility::Private,
            Visibility::Protected,
            Visibility::Internal,
            Visibility::Public,
        ] {
            let json = serde_json::to_string(&vis).unwrap();
            let back: Visibility = serde_json::from_str(&json).unwrap();
            assert_eq!(vis, back);
        }
    }
}
