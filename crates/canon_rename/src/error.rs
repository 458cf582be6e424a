//! Failure modes of a rename request.

use canon_model::ReferenceError;
use canon_source::Span;

/// Why a rename was not performed.
///
/// Every variant is a recoverable typed result at the engine boundary; the
/// calling rule or fixer decides whether to skip silently or report. None
/// of these leaves a partially applied rename behind.
#[derive(Debug, thiserror::Error)]
pub enum RenameError {
    /// The current or proposed identifier is empty or malformed.
    #[error("invalid identifier {name:?}")]
    InvalidIdentifier {
        /// The offending identifier text.
        name: String,
    },

    /// The proposed name is already bound in the target scope.
    #[error("name '{name}' is already bound in the target scope")]
    NameCollision {
        /// The name that collided.
        name: String,
        /// Where the existing binding is declared.
        existing: Span,
    },

    /// The reference-resolution collaborator failed to enumerate use sites,
    /// or the plan's spans no longer match the snapshot text.
    #[error("reference enumeration failed: {0}")]
    ReferenceEnumeration(String),

    /// The request was cancelled during reference enumeration.
    #[error("rename cancelled")]
    Cancelled,
}

impl From<ReferenceError> for RenameError {
    fn from(err: ReferenceError) -> Self {
        match err {
            ReferenceError::Failed(reason) => RenameError::ReferenceEnumeration(reason),
            ReferenceError::Cancelled => RenameError::Cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_collision() {
        let err = RenameError::NameCollision {
            name: "_total".to_string(),
            existing: Span::DUMMY,
        };
        assert_eq!(
            format!("{err}"),
            "name '_total' is already bound in the target scope"
        );
    }

    #[test]
    fn reference_error_conversion() {
        let failed: RenameError = ReferenceError::Failed("stale model".to_string()).into();
        assert!(matches!(failed, RenameError::ReferenceEnumeration(_)));
        let cancelled: RenameError = ReferenceError::Cancelled.into();
        assert!(matches!(cancelled, RenameError::Cancelled));
    }
}
