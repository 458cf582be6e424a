//! Lint engine: rule registration, configuration, and parallel execution.

use std::collections::HashSet;

use canon_common::{CancelToken, Interner};
use canon_config::LintConfig;
use canon_diagnostics::{DiagnosticSink, Severity};
use canon_model::Program;
use rayon::prelude::*;

use crate::rules::register_builtin_rules;
use crate::{LintContext, LintRule};

/// Orchestrates running lint rules over every declaration of a program.
///
/// Rules are registered at construction time. The engine respects the
/// `LintConfig`: rules listed in `allow` are suppressed, rules in `deny`
/// have their findings promoted to error severity, and rules in `warn` are
/// pinned to warning severity. Declarations are checked in parallel; rules
/// and the convention checker are pure, and the sink is thread-safe.
pub struct LintEngine {
    rules: Vec<Box<dyn LintRule>>,
    denied: HashSet<String>,
    allowed: HashSet<String>,
    warned: HashSet<String>,
}

impl LintEngine {
    /// Creates an engine with all builtin rules, configured by `config`.
    pub fn new(config: &LintConfig) -> Self {
        let mut engine = Self {
            rules: Vec::new(),
            denied: config.deny.iter().cloned().collect(),
            allowed: config.allow.iter().cloned().collect(),
            warned: config.warn.iter().cloned().collect(),
        };
        register_builtin_rules(&mut engine);
        engine
    }

    /// Creates an engine with default configuration (no overrides).
    pub fn with_defaults() -> Self {
        Self::new(&LintConfig::default())
    }

    /// Registers a lint rule with the engine.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }

    /// Returns the number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all registered rules.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns `(code, name, description)` for every registered rule.
    pub fn rule_summaries(&self) -> Vec<(String, &str, &str)> {
        self.rules
            .iter()
            .map(|r| (r.code().to_string(), r.name(), r.description()))
            .collect()
    }

    /// Runs all enabled rules over every declaration of `program`.
    ///
    /// Declarations are distributed across rayon workers; each worker runs
    /// every enabled rule against its declaration and emits into `sink`,
    /// with severities adjusted per the configuration.
    pub fn run(&self, program: &Program, interner: &Interner, sink: &DiagnosticSink) {
        let cancel = CancelToken::new();
        let cx = LintContext {
            program,
            interner,
            cancel: &cancel,
        };

        let decls: Vec<_> = program.decls.iter().map(|(_, decl)| decl).collect();
        decls.par_iter().for_each(|decl| {
            for rule in &self.rules {
                if self.allowed.contains(rule.name()) {
                    continue;
                }

                // Capture into a scratch sink so configured severity
                // overrides can be applied before the real emit.
                let scratch = DiagnosticSink::new();
                rule.check_decl(decl, &cx, &scratch);

                let override_severity = if self.denied.contains(rule.name()) {
                    Some(Severity::Error)
                } else if self.warned.contains(rule.name()) {
                    Some(Severity::Warning)
                } else {
                    None
                };
                for mut diag in scratch.take_all() {
                    if let Some(severity) = override_severity {
                        diag.severity = severity;
                    }
                    sink.emit(diag);
                }
            }
        });
    }
}
