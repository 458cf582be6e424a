//! N002: non-private member naming — PascalCase.

use canon_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Label, Severity};
use canon_model::{DeclKind, Declaration};
use canon_naming::check_declaration;

use crate::helpers::attach_rename_fix;
use crate::{LintContext, LintRule};

/// Detects non-private fields, properties, and methods whose names are not
/// PascalCase.
///
/// A leading underscore is stripped in the suggestion (`_Total` suggests
/// `Total`, `total` suggests `Total`). Constants are exempt. The suggested
/// fix is the full rename plan over declaration and references.
pub struct MemberPascalNaming;

impl MemberPascalNaming {
    fn applies_to(kind: DeclKind) -> bool {
        matches!(kind, DeclKind::Field | DeclKind::Property | DeclKind::Method)
    }
}

impl LintRule for MemberPascalNaming {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Naming, 2)
    }

    fn name(&self) -> &str {
        "member-pascal-naming"
    }

    fn description(&self) -> &str {
        "non-private member name is not PascalCase"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_decl(&self, decl: &Declaration, cx: &LintContext<'_>, sink: &DiagnosticSink) {
        if !Self::applies_to(decl.kind) || decl.visibility.is_private() {
            return;
        }
        let Some(violation) = check_declaration(decl, cx.interner) else {
            return;
        };

        let diag = Diagnostic::warning(
            self.code(),
            format!(
                "{} '{}' should be named '{}'",
                kind_label(decl.kind),
                violation.actual,
                violation.suggested
            ),
            violation.span,
        )
        .with_label(Label::primary(
            violation.span,
            format!("rename to '{}'", violation.suggested),
        ))
        .with_note("non-private members use PascalCase names");

        sink.emit(attach_rename_fix(diag, &violation, cx));
    }
}

fn kind_label(kind: DeclKind) -> &'static str {
    match kind {
        DeclKind::Field => "field",
        DeclKind::Property => "property",
        DeclKind::Method => "method",
        DeclKind::Local => "local",
        DeclKind::Type => "type",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canon_common::{CancelToken, Interner};
    use canon_model::{DeclId, Program, Reference, ScopeId, Visibility};
    use canon_source::Span;

    fn program_with_member(
        interner: &Interner,
        source: &str,
        name: &str,
        kind: DeclKind,
        visibility: Visibility,
    ) -> Program {
        let mut program = Program::new();
        let file = program.sources.add_source("A.cs", source.to_string());
        let mut occurrences = source
            .match_indices(name)
            .map(|(at, _)| Span::new(file, at as u32, (at + name.len()) as u32));
        let span = occurrences.next().expect("member text not found");
        let id = program.decls.alloc(Declaration {
            id: DeclId::from_raw(0),
            name: interner.get_or_intern(name),
            kind,
            visibility,
            explicit_visibility: true,
            is_const: false,
            scope: ScopeId::from_raw(0),
            span,
        });
        for span in occurrences {
            program.references.push(Reference { decl: id, span });
        }
        program
    }

    fn check(program: &Program, interner: &Interner) -> Vec<canon_diagnostics::Diagnostic> {
        let cancel = CancelToken::new();
        let cx = LintContext {
            program,
            interner,
            cancel: &cancel,
        };
        let sink = DiagnosticSink::new();
        for (_, decl) in program.decls.iter() {
            MemberPascalNaming.check_decl(decl, &cx, &sink);
        }
        sink.take_all()
    }

    #[test]
    fn underscored_public_field_fires() {
        let interner = Interner::new();
        let source = "class C { public int _Total; int F() { return _Total; } }";
        let program = program_with_member(
            &interner,
            source,
            "_Total",
            DeclKind::Field,
            Visibility::Public,
        );
        let diags = check(&program, &interner);
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("'Total'"));
        let fix = diags[0].fix.as_ref().expect("fix expected");
        assert_eq!(fix.replacements.len(), 2);
    }

    #[test]
    fn lowercase_public_method_fires() {
        let interner = Interner::new();
        let source = "class C { public void process() { } }";
        let program = program_with_member(
            &interner,
            source,
            "process",
            DeclKind::Method,
            Visibility::Public,
        );
        let diags = check(&program, &interner);
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.starts_with("method 'process'"));
        assert!(diags[0].message.contains("'Process'"));
    }

    #[test]
    fn pascal_member_is_silent() {
        let interner = Interner::new();
        let program = program_with_member(
            &interner,
            "class C { public int Total; }",
            "Total",
            DeclKind::Field,
            Visibility::Public,
        );
        assert!(check(&program, &interner).is_empty());
    }

    #[test]
    fn private_members_are_skipped() {
        let interner = Interner::new();
        let program = program_with_member(
            &interner,
            "class C { private void process() { } }",
            "process",
            DeclKind::Method,
            Visibility::Private,
        );
        assert!(check(&program, &interner).is_empty());
    }

    #[test]
    fn locals_and_types_are_skipped() {
        let interner = Interner::new();
        for kind in [DeclKind::Local, DeclKind::Type] {
            let program = program_with_member(
                &interner,
                "class C { int f() { int index = 0; return index; } }",
                "index",
                kind,
                Visibility::Public,
            );
            assert!(check(&program, &interner).is_empty(), "{kind:?} flagged");
        }
    }

    #[test]
    fn protected_and_internal_members_are_checked() {
        let interner = Interner::new();
        for visibility in [Visibility::Protected, Visibility::Internal] {
            let program = program_with_member(
                &interner,
                "class C { int count; }",
                "count",
                DeclKind::Field,
                visibility,
            );
            let diags = check(&program, &interner);
            assert_eq!(diags.len(), 1, "{visibility:?} not flagged");
            assert!(diags[0].message.contains("'Count'"));
        }
    }
}
