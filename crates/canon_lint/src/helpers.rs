//! Shared helpers for rule implementations.

use crate::LintContext;
use canon_diagnostics::{Diagnostic, SuggestedFix};
use canon_naming::ConventionViolation;
use canon_rename::{RenameError, SafeRenamer};

/// Attaches the rename fix for `violation` to `diag`, when one can be
/// planned safely.
///
/// On a scope collision the fix is omitted and a note explains why; the
/// finding itself still stands. Enumeration failures and cancellation also
/// omit the fix — the caller decides nothing further, matching the policy
/// that no rename error is fatal to analysis.
pub(crate) fn attach_rename_fix(
    diag: Diagnostic,
    violation: &ConventionViolation,
    cx: &LintContext<'_>,
) -> Diagnostic {
    let renamer = SafeRenamer::new(cx.program, cx.interner);
    match renamer.plan(violation.decl, cx.cancel) {
        Ok(plan) if !plan.is_noop() => {
            diag.with_fix(SuggestedFix::new(plan.describe(), plan.replacements()))
        }
        Ok(_) => diag,
        Err(RenameError::NameCollision { name, .. }) => diag.with_note(format!(
            "cannot rename automatically: '{name}' is already bound in this scope"
        )),
        Err(_) => diag,
    }
}
