//! N001: private field naming — leading underscore, camelCase.

use canon_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Label, Severity};
use canon_model::{DeclKind, Declaration};
use canon_naming::check_declaration;

use crate::helpers::attach_rename_fix;
use crate::{LintContext, LintRule};

/// Detects private, non-constant fields whose names do not follow the
/// leading-underscore camelCase convention (`_total`, `_openOrders`).
///
/// Legacy `m_` prefixes are folded into the suggestion, so `m_Total`
/// suggests `_total`. The suggested fix renames the declaration and every
/// reference; if the canonical name is already bound in the field's scope,
/// the fix is withheld and a note explains the collision.
pub struct PrivateFieldNaming;

impl LintRule for PrivateFieldNaming {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Naming, 1)
    }

    fn name(&self) -> &str {
        "private-field-naming"
    }

    fn description(&self) -> &str {
        "private field name violates the leading-underscore convention"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_decl(&self, decl: &Declaration, cx: &LintContext<'_>, sink: &DiagnosticSink) {
        if decl.kind != DeclKind::Field || !decl.visibility.is_private() {
            return;
        }
        let Some(violation) = check_declaration(decl, cx.interner) else {
            return;
        };

        let diag = Diagnostic::warning(
            self.code(),
            format!(
                "private field '{}' should be named '{}'",
                violation.actual, violation.suggested
            ),
            violation.span,
        )
        .with_label(Label::primary(
            violation.span,
            format!("rename this field to '{}'", violation.suggested),
        ))
        .with_note(format!(
            "private fields use {} names",
            violation.convention
        ));

        sink.emit(attach_rename_fix(diag, &violation, cx));
    }
}
