//! N003: local variable naming — lower-case first character.

use canon_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Label, Severity};
use canon_model::{DeclKind, Declaration};
use canon_naming::starts_lowercase;

use crate::{LintContext, LintRule};

/// Detects non-constant locals whose names start with an upper-case
/// character.
///
/// Locals live in a single method body, so the finding carries the
/// suggested spelling in its help text rather than a program-wide rename
/// fix.
pub struct LocalVariableNaming;

impl LintRule for LocalVariableNaming {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Naming, 3)
    }

    fn name(&self) -> &str {
        "local-variable-naming"
    }

    fn description(&self) -> &str {
        "local variable name starts with an upper-case character"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_decl(&self, decl: &Declaration, cx: &LintContext<'_>, sink: &DiagnosticSink) {
        if decl.kind != DeclKind::Local || decl.is_const {
            return;
        }
        let name = cx.interner.resolve(decl.name);
        if name.trim().is_empty() || starts_lowercase(name) {
            return;
        }
        let suggested = lower_first(name);
        sink.emit(
            Diagnostic::warning(
                self.code(),
                format!("local variable '{name}' should be named '{suggested}'"),
                decl.span,
            )
            .with_label(Label::primary(decl.span, "starts with an upper-case character"))
            .with_help(format!("rename it to '{suggested}'")),
        );
    }
}

/// Lower-cases the first character, leaving the rest of the name alone.
fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out = String::with_capacity(name.len());
            out.extend(first.to_lowercase());
            out.push_str(chars.as_str());
            out
        }
    }
}
