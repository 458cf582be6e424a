//! Reference sites and the reference-resolution collaborator.

use crate::ids::DeclId;
use canon_common::CancelToken;
use canon_source::Span;

/// One use site of a declaration: the span of the identifier token that
/// refers to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reference {
    /// The declaration this reference resolves to.
    pub decl: DeclId,
    /// The span of the referring identifier token.
    pub span: Span,
}

/// Failure modes of reference enumeration.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    /// The collaborator could not complete enumeration (for example, the
    /// exported model is stale relative to the host's workspace).
    #[error("reference enumeration failed: {0}")]
    Failed(String),

    /// Enumeration was cancelled through the [`CancelToken`].
    #[error("reference enumeration cancelled")]
    Cancelled,
}

/// The reference-resolution collaborator.
///
/// Enumeration cost is proportional to program size, so implementations
/// must poll the token and bail out with [`ReferenceError::Cancelled`]
/// rather than running to completion after cancellation.
pub trait ReferenceSource {
    /// Returns every use site of `decl`, excluding the declaration site
    /// itself.
    fn references_to(
        &self,
        decl: DeclId,
        cancel: &CancelToken,
    ) -> Result<Vec<Reference>, ReferenceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ReferenceError::Failed("stale model".to_string());
        assert_eq!(format!("{err}"), "reference enumeration failed: stale model");
        assert_eq!(
            format!("{}", ReferenceError::Cancelled),
            "reference enumeration cancelled"
        );
    }
}
