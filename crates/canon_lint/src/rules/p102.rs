//! P102: missing access modifier — visibility left to the language default.

use canon_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Label, Severity};
use canon_model::{DeclKind, Declaration, Visibility};

use crate::{LintContext, LintRule};

/// Detects types and members that rely on the language's default
/// visibility instead of spelling a modifier out.
///
/// Locals have no modifiers and are skipped. Inserting the modifier is a
/// syntax rewrite the host owns; the finding states what the effective
/// visibility is so the author can write it down.
pub struct MissingVisibility;

impl LintRule for MissingVisibility {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Practice, 102)
    }

    fn name(&self) -> &str {
        "missing-visibility"
    }

    fn description(&self) -> &str {
        "declaration relies on the default access modifier"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_decl(&self, decl: &Declaration, cx: &LintContext<'_>, sink: &DiagnosticSink) {
        if decl.kind == DeclKind::Local || decl.explicit_visibility {
            return;
        }
        let name = cx.interner.resolve(decl.name);
        sink.emit(
            Diagnostic::warning(
                self.code(),
                format!("'{name}' has no explicit access modifier"),
                decl.span,
            )
            .with_label(Label::primary(decl.span, "modifier omitted here"))
            .with_note(format!(
                "the effective visibility is {}",
                visibility_label(decl.visibility)
            ))
            .with_help("state the access modifier explicitly"),
        );
    }
}

fn visibility_label(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Private => "private",
        Visibility::Protected => "protected",
        Visibility::Internal => "internal",
        Visibility::Public => "public",
    }
}
