//! Opaque id newtypes for model entities.

use crate::arena::ArenaId;
use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
        pub struct $name(u32);

        impl $name {
            /// Creates an id from a raw `u32` index.
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            /// Returns the raw `u32` index.
            pub fn as_raw(self) -> u32 {
                self.0
            }
        }

        impl ArenaId for $name {
            fn from_raw(index: u32) -> Self {
                Self(index)
            }

            fn as_raw(self) -> u32 {
                self.0
            }
        }
    };
}

define_id!(
    /// Opaque, copyable id for a declaration in the exported model.
    DeclId
);

define_id!(
    /// Opaque id for the scope a declaration is bound in.
    ///
    /// The host compiler flattens its lexical and type scopes into these
    /// ids when exporting: two declarations with the same `ScopeId` and the
    /// same name would be ambiguous, which is exactly the question the
    /// rename collision check asks.
    ScopeId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_roundtrip() {
        let id = DeclId::from_raw(12);
        assert_eq!(id.as_raw(), 12);
    }

    #[test]
    fn ids_of_same_index_are_equal() {
        assert_eq!(ScopeId::from_raw(3), ScopeId::from_raw(3));
        assert_ne!(ScopeId::from_raw(3), ScopeId::from_raw(4));
    }

    #[test]
    fn serde_roundtrip() {
        let id = DeclId::from_raw(5);
        let json = serde_json::to_string(&id).unwrap();
        let back: DeclId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
