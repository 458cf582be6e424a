//! `canon rules` — list the registered rules.

use canon_lint::LintEngine;

/// Prints every registered rule as `CODE  name  description`.
pub fn run() -> Result<i32, Box<dyn std::error::Error>> {
    let engine = LintEngine::with_defaults();
    let summaries = engine.rule_summaries();
    let name_width = summaries
        .iter()
        .map(|(_, name, _)| name.len())
        .max()
        .unwrap_or(0);
    for (code, name, description) in summaries {
        println!("{code}  {name:<name_width$}  {description}");
    }
    Ok(0)
}
