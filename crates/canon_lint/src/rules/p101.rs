//! P101: non-private field — fields should be encapsulated.

use canon_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Label, Severity};
use canon_model::{DeclKind, Declaration};

use crate::{LintContext, LintRule};

/// Detects mutable fields exposed beyond the declaring type.
///
/// Constants are fine to expose; anything else should go through a
/// property so the type keeps control of its representation. The structural
/// field-to-property rewrite needs syntax the exported model does not
/// carry, so this finding ships help text instead of a mechanical fix.
pub struct NonPrivateField;

impl LintRule for NonPrivateField {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Practice, 101)
    }

    fn name(&self) -> &str {
        "non-private-field"
    }

    fn description(&self) -> &str {
        "field is exposed beyond the declaring type"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_decl(&self, decl: &Declaration, cx: &LintContext<'_>, sink: &DiagnosticSink) {
        if decl.kind != DeclKind::Field || decl.visibility.is_private() || decl.is_const {
            return;
        }
        let name = cx.interner.resolve(decl.name);
        sink.emit(
            Diagnostic::warning(
                self.code(),
                format!("field '{name}' is exposed beyond its declaring type"),
                decl.span,
            )
            .with_label(Label::primary(decl.span, "declared here"))
            .with_help("expose it through a property and make the field private"),
        );
    }
}
