//! Mechanically applicable fix suggestions attached to diagnostics.

use canon_source::Span;
use serde::{Deserialize, Serialize};

/// One text replacement of a suggested fix.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Replacement {
    /// The source span to replace.
    pub span: Span,
    /// The new text to insert in place of the span.
    pub new_text: String,
}

/// A fix that can be applied to source text without further analysis.
///
/// A rename fix carries one [`Replacement`] per occurrence — the
/// declaration plus every reference — and is only valid as a whole: a fixer
/// applies all replacements or none.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SuggestedFix {
    /// A description of what this fix does.
    pub message: String,
    /// The set of text replacements that together implement the fix.
    pub replacements: Vec<Replacement>,
}

impl SuggestedFix {
    /// Creates a fix from a message and its replacements.
    pub fn new(message: impl Into<String>, replacements: Vec<Replacement>) -> Self {
        Self {
            message: message.into(),
            replacements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canon_source::FileId;

    #[test]
    fn rename_fix_has_one_replacement_per_site() {
        let file = FileId::from_raw(0);
        let fix = SuggestedFix::new(
            "rename 'm_total' to '_total'",
            vec![
                Replacement {
                    span: Span::new(file, 12, 19),
                    new_text: "_total".to_string(),
                },
                Replacement {
                    span: Span::new(file, 40, 47),
                    new_text: "_total".to_string(),
                },
            ],
        );
        assert_eq!(fix.replacements.len(), 2);
        assert!(fix.replacements.iter().all(|r| r.new_text == "_total"));
    }

    #[test]
    fn serde_roundtrip() {
        let fix = SuggestedFix::new(
            "rename",
            vec![Replacement {
                span: Span::DUMMY,
                new_text: "Total".to_string(),
            }],
        );
        let json = serde_json::to_string(&fix).unwrap();
        let back: SuggestedFix = serde_json::from_str(&json).unwrap();
        assert_eq!(back.message, "rename");
        assert_eq!(back.replacements.len(), 1);
    }
}
