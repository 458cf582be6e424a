//! Structured findings with severity, codes, labels, and fixes.

use crate::code::DiagnosticCode;
use crate::label::Label;
use crate::severity::Severity;
use crate::suggested_fix::SuggestedFix;
use canon_source::Span;
use serde::{Deserialize, Serialize};

/// A structured finding reported by a rule.
///
/// Carries the severity and stable code, the main message, the primary
/// span (usually the identifier token), optional context labels and notes,
/// and an optional mechanically applicable fix.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this finding.
    pub severity: Severity,
    /// The stable code identifying the rule that produced it.
    pub code: DiagnosticCode,
    /// The main message.
    pub message: String,
    /// The primary source span.
    pub primary_span: Span,
    /// Additional annotated source spans.
    pub labels: Vec<Label>,
    /// Explanatory footnotes (`note: ...`).
    pub notes: Vec<String>,
    /// Actionable suggestions (`help: ...`).
    pub help: Vec<String>,
    /// A fix a fixer can apply without further analysis, if available.
    pub fix: Option<SuggestedFix>,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    pub fn error(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self::with_severity(Severity::Error, code, message, span)
    }

    /// Creates a warning diagnostic.
    pub fn warning(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self::with_severity(Severity::Warning, code, message, span)
    }

    /// Creates a diagnostic at an explicit severity.
    pub fn with_severity(
        severity: Severity,
        code: DiagnosticCode,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            primary_span: span,
            labels: Vec::new(),
            notes: Vec::new(),
            help: Vec::new(),
            fix: None,
        }
    }

    /// Adds a label to this diagnostic.
    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    /// Adds a note to this diagnostic.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Adds a help message to this diagnostic.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    /// Attaches the suggested fix for this diagnostic.
    pub fn with_fix(mut self, fix: SuggestedFix) -> Self {
        self.fix = Some(fix);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Category;
    use crate::suggested_fix::Replacement;

    #[test]
    fn create_warning() {
        let code = DiagnosticCode::new(Category::Naming, 1);
        let diag = Diagnostic::warning(code, "field name violates convention", Span::DUMMY);
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(format!("{}", diag.code), "N001");
        assert!(diag.fix.is_none());
    }

    #[test]
    fn create_error() {
        let code = DiagnosticCode::new(Category::Error, 1);
        let diag = Diagnostic::error(code, "dangling reference in model", Span::DUMMY);
        assert!(diag.severity.is_error());
    }

    #[test]
    fn builder_methods() {
        let code = DiagnosticCode::new(Category::Naming, 2);
        let diag = Diagnostic::warning(code, "member should be PascalCase", Span::DUMMY)
            .with_label(Label::primary(Span::DUMMY, "rename this member"))
            .with_note("non-private members use PascalCase")
            .with_help("rename to 'Total'");
        assert_eq!(diag.labels.len(), 1);
        assert_eq!(diag.notes.len(), 1);
        assert_eq!(diag.help.len(), 1);
    }

    #[test]
    fn with_fix_sets_fix() {
        let code = DiagnosticCode::new(Category::Naming, 1);
        let fix = SuggestedFix::new(
            "rename 'm_total' to '_total'",
            vec![Replacement {
                span: Span::DUMMY,
                new_text: "_total".to_string(),
            }],
        );
        let diag = Diagnostic::warning(code, "field name violates convention", Span::DUMMY)
            .with_fix(fix);
        assert_eq!(diag.fix.unwrap().replacements.len(), 1);
    }
}
