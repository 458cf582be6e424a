//! Opaque identifier for source files in a program snapshot.

use serde::{Deserialize, Serialize};

/// Opaque identifier for a source file held by a [`SourceDb`](crate::SourceDb).
///
/// File ids are assigned in load order and are stable across the snapshot
/// replacements produced by a rename, so spans remain addressable in both
/// the old and the new snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct FileId(u32);

impl FileId {
    /// A dummy file id for spans with no source location.
    pub const DUMMY: FileId = FileId(u32::MAX);

    /// Creates a `FileId` from a raw `u32` value.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw `u32` value of this `FileId`.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_roundtrip() {
        let id = FileId::from_raw(3);
        assert_eq!(id.as_raw(), 3);
    }

    #[test]
    fn dummy_is_distinct() {
        assert_ne!(FileId::DUMMY, FileId::from_raw(0));
    }

    #[test]
    fn serde_roundtrip() {
        let id = FileId::from_raw(9);
        let json = serde_json::to_string(&id).unwrap();
        let back: FileId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
