//! `canon fix` — apply safe renames for naming findings.
//!
//! Renames are applied one at a time: each successful rename produces a new
//! snapshot, and the next candidate is found on that snapshot so every plan
//! sees up-to-date offsets. Declarations whose canonical name collides are
//! skipped and reported; they never block the rest. With `--dry-run` the
//! renames are planned and reported but no file is written.

use std::collections::HashSet;
use std::error::Error;

use canon_common::{CancelToken, Interner};
use canon_model::{DeclId, DeclKind, Program};
use canon_naming::check_declaration;
use canon_rename::{RenameError, SafeRenamer};

use crate::pipeline::{load_model, resolve_project_root};
use crate::{FixArgs, GlobalArgs};

/// Runs the `canon fix` command.
pub fn run(args: &FixArgs, global: &GlobalArgs) -> Result<i32, Box<dyn Error>> {
    let project_dir = resolve_project_root(global)?;
    let config = canon_config::load_config(&project_dir)?;
    let (original, interner) = load_model(&project_dir, &config)?;

    let cancel = CancelToken::new();
    let mut program = original.clone();
    let mut handled: HashSet<u32> = HashSet::new();
    let mut renamed = 0usize;
    let mut skipped = 0usize;

    while let Some((decl, actual, suggested)) = next_fixable(&program, &interner, &handled) {
        handled.insert(decl.as_raw());
        let renamer = SafeRenamer::new(&program, &interner);
        match renamer.rename(decl, &cancel) {
            Ok(outcome) => {
                if !global.quiet {
                    eprintln!(
                        "   Renamed '{actual}' to '{suggested}' ({} site(s))",
                        outcome.replaced
                    );
                }
                renamed += 1;
                program = outcome.program;
            }
            Err(RenameError::NameCollision { name, .. }) => {
                if !global.quiet {
                    eprintln!("   Skipped '{actual}': '{name}' is already in use");
                }
                skipped += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }

    if args.dry_run {
        if !global.quiet {
            eprintln!("   Dry run: {renamed} rename(s) planned, {skipped} skipped; nothing written");
        }
        return Ok(0);
    }

    // Write back only the files the renames actually changed.
    let mut written = 0usize;
    for file in program.sources.files() {
        if file.content_hash != original.sources.get_file(file.id).content_hash {
            let target = project_dir.join(&file.path);
            std::fs::write(&target, &file.content)
                .map_err(|e| format!("failed to write {}: {e}", target.display()))?;
            written += 1;
        }
    }

    if !global.quiet {
        eprintln!("   Applied {renamed} rename(s), {skipped} skipped, {written} file(s) written");
    }
    Ok(0)
}

/// Finds the next declaration with an applicable naming violation.
///
/// Eligible declarations match the naming rules' scope: private fields, and
/// non-private fields, properties, and methods. Returns the declaration id
/// with its current and suggested spelling.
fn next_fixable(
    program: &Program,
    interner: &Interner,
    handled: &HashSet<u32>,
) -> Option<(DeclId, String, String)> {
    program.decls.iter().find_map(|(id, decl)| {
        if handled.contains(&id.as_raw()) {
            return None;
        }
        let eligible = match decl.kind {
            DeclKind::Field => true,
            DeclKind::Property | DeclKind::Method => !decl.visibility.is_private(),
            DeclKind::Local | DeclKind::Type => false,
        };
        if !eligible {
            return None;
        }
        check_declaration(decl, interner).map(|v| (id, v.actual, v.suggested))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_project(tmp: &TempDir) {
        fs::write(
            tmp.path().join("canon.toml"),
            "[project]\nname = \"t\"\nmodel = \"model.json\"\n",
        )
        .unwrap();
        let content = "class C { private int m_total; int F() { return m_total; } }";
        fs::write(tmp.path().join("A.cs"), content).unwrap();
        fs::write(
            tmp.path().join("model.json"),
            r#"{
                "files": [{
                    "path": "A.cs",
                    "content": "class C { private int m_total; int F() { return m_total; } }"
                }],
                "decls": [{
                    "name": "m_total", "kind": "field", "visibility": "private",
                    "scope": 0, "file": 0, "start": 22, "end": 29
                }],
                "references": [{"decl": 0, "file": 0, "start": 48, "end": 55}]
            }"#,
        )
        .unwrap();
    }

    fn global_for(tmp: &TempDir) -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            color: false,
            project: Some(tmp.path().to_string_lossy().into_owned()),
        }
    }

    #[test]
    fn fix_rewrites_declaration_and_references() {
        let tmp = TempDir::new().unwrap();
        write_project(&tmp);
        let code = run(&FixArgs { dry_run: false }, &global_for(&tmp)).unwrap();
        assert_eq!(code, 0);

        let rewritten = fs::read_to_string(tmp.path().join("A.cs")).unwrap();
        assert_eq!(
            rewritten,
            "class C { private int _total; int F() { return _total; } }"
        );
    }

    #[test]
    fn dry_run_leaves_files_alone() {
        let tmp = TempDir::new().unwrap();
        write_project(&tmp);
        let before = fs::read_to_string(tmp.path().join("A.cs")).unwrap();
        let code = run(&FixArgs { dry_run: true }, &global_for(&tmp)).unwrap();
        assert_eq!(code, 0);
        let after = fs::read_to_string(tmp.path().join("A.cs")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn fix_with_nothing_to_do_is_clean() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("canon.toml"),
            "[project]\nname = \"t\"\nmodel = \"model.json\"\n",
        )
        .unwrap();
        fs::write(
            tmp.path().join("model.json"),
            r#"{
                "files": [{"path": "A.cs", "content": "class C { private int _total; }"}],
                "decls": [{
                    "name": "_total", "kind": "field", "visibility": "private",
                    "scope": 0, "file": 0, "start": 22, "end": 28
                }]
            }"#,
        )
        .unwrap();
        let code = run(&FixArgs { dry_run: false }, &global_for(&tmp)).unwrap();
        assert_eq!(code, 0);
        // Nothing changed, so the source file is never written at all.
        assert!(!tmp.path().join("A.cs").exists());
    }
}
