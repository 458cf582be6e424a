//! Lint rules and engine for naming and practice analysis.
//!
//! Each rule is a pattern match over the facts the host compiler exported:
//! it inspects one [`Declaration`] at a time and emits structured
//! diagnostics, attaching a mechanical rename fix where one can be planned
//! safely. Rules hold no state, so the engine checks declarations in
//! parallel.
//!
//! # Rule categories
//!
//! - **N-series (naming):** private-field, member-PascalCase, and
//!   local-variable conventions
//! - **P-series (practices):** field encapsulation, explicit access
//!   modifiers

#![warn(missing_docs)]

mod engine;
mod helpers;
mod rules;

pub use engine::LintEngine;
pub use rules::register_builtin_rules;
pub use rules::{
    LocalVariableNaming, MemberPascalNaming, MissingVisibility, NonPrivateField,
    PrivateFieldNaming,
};

use canon_common::{CancelToken, Interner};
use canon_diagnostics::{DiagnosticCode, DiagnosticSink, Severity};
use canon_model::{Declaration, Program};

/// Shared read-only context handed to every rule invocation.
///
/// Rules that plan rename fixes need the whole program (for references and
/// collision checks) and the interner (for name text); the cancel token
/// flows into reference enumeration.
pub struct LintContext<'a> {
    /// The snapshot under analysis.
    pub program: &'a Program,
    /// The interner holding all identifier text.
    pub interner: &'a Interner,
    /// Token for cancelling reference enumeration inside fix planning.
    pub cancel: &'a CancelToken,
}

/// A single lint rule that checks one declaration at a time.
///
/// Each rule has a stable diagnostic code, a kebab-case name used in
/// `deny`/`allow` lists, a description, and a default severity. `check_decl`
/// must be pure over its inputs: the engine calls it concurrently across
/// declarations.
pub trait LintRule: Send + Sync {
    /// Returns the diagnostic code for this rule (e.g. N001, P102).
    fn code(&self) -> DiagnosticCode;

    /// Returns the short kebab-case name of this rule (e.g. "private-field-naming").
    fn name(&self) -> &str;

    /// Returns a human-readable description of what this rule checks.
    fn description(&self) -> &str;

    /// Returns the default severity for diagnostics emitted by this rule.
    fn default_severity(&self) -> Severity;

    /// Checks a single declaration and emits diagnostics to the sink.
    fn check_decl(&self, decl: &Declaration, cx: &LintContext<'_>, sink: &DiagnosticSink);
}
