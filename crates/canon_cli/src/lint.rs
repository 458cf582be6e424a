//! `canon lint` — run the rule set and render diagnostics.
//!
//! The pipeline: find the project root (walk up for `canon.toml`), load the
//! configuration, load the exported symbol model, run the lint engine, and
//! render the findings as text or JSON. Exit code 0 when clean, 1 when any
//! finding reached error severity.

use canon_config::{LintConfig, ProjectConfig};
use canon_diagnostics::{DiagnosticRenderer, DiagnosticSink, Severity, TerminalRenderer};
use canon_lint::LintEngine;

use crate::pipeline::{load_model, resolve_project_root};
use crate::{GlobalArgs, LintArgs, ReportFormat};

/// Runs the `canon lint` command.
pub fn run(args: &LintArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = resolve_project_root(global)?;
    let config = canon_config::load_config(&project_dir)?;

    if !global.quiet {
        eprintln!(
            "   Checking {} (model: {})",
            config.project.name, config.project.model
        );
    }

    let (program, interner) = load_model(&project_dir, &config)?;

    let merged = merge_lint_config(&config, args);
    let engine = LintEngine::new(&merged);
    let sink = DiagnosticSink::new();
    engine.run(&program, &interner, &sink);

    let diagnostics = sink.diagnostics();

    match args.format {
        ReportFormat::Text => {
            let renderer = TerminalRenderer::new(global.color);
            for diag in &diagnostics {
                eprintln!("{}", renderer.render(diag, &program.sources));
            }
        }
        ReportFormat::Json => {
            let json =
                serde_json::to_string_pretty(&diagnostics).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }

    let error_count = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    let warning_count = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();

    if !global.quiet && args.format == ReportFormat::Text {
        eprintln!("   Result: {error_count} error(s), {warning_count} warning(s)");
    }

    Ok(if sink.has_errors() { 1 } else { 0 })
}

/// Merges CLI `--allow`/`--deny` flags over the config file's lint section.
///
/// CLI flags win: a rule passed to `--allow` is removed from the config's
/// `deny` list, and vice versa.
fn merge_lint_config(config: &ProjectConfig, args: &LintArgs) -> LintConfig {
    let mut deny = config.lint.deny.clone();
    let mut allow = config.lint.allow.clone();
    let warn = config.lint.warn.clone();

    for rule in &args.deny {
        allow.retain(|r| r != rule);
        if !deny.contains(rule) {
            deny.push(rule.clone());
        }
    }
    for rule in &args.allow {
        deny.retain(|r| r != rule);
        if !allow.contains(rule) {
            allow.push(rule.clone());
        }
    }

    LintConfig { deny, allow, warn }
}
