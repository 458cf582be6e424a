//! Applying a rename plan as one atomic edit over a snapshot.

use std::collections::BTreeMap;

use crate::error::RenameError;
use crate::plan::RenamePlan;
use canon_common::Interner;
use canon_model::Program;
use canon_source::Span;

/// Rewrites every site of `plan` in a clone of `program`, returning the new
/// snapshot.
///
/// The rewrite is all-or-nothing: every check runs before any text is
/// spliced, and the result program is only assembled once all files and
/// spans have been remapped. `program` itself is never modified.
pub(crate) fn apply_plan(
    program: &Program,
    interner: &Interner,
    plan: &RenamePlan,
) -> Result<Program, RenameError> {
    let old_len = plan.old_name.len() as u32;
    let new_len = plan.new_name.len() as u32;
    let delta = new_len as i64 - old_len as i64;

    // Group sites by file and order them by offset.
    let mut edits_by_file: BTreeMap<u32, Vec<Span>> = BTreeMap::new();
    for site in &plan.sites {
        edits_by_file.entry(site.file.as_raw()).or_default().push(*site);
    }
    for edits in edits_by_file.values_mut() {
        edits.sort_by_key(|s| s.start);
        let mut previous_end = 0u32;
        for edit in edits.iter() {
            if edit.start < previous_end {
                return Err(RenameError::ReferenceEnumeration(format!(
                    "overlapping rename sites at {}..{}",
                    edit.start, edit.end
                )));
            }
            if program.sources.snippet(*edit) != plan.old_name {
                return Err(RenameError::ReferenceEnumeration(format!(
                    "site {}..{} no longer spells '{}'",
                    edit.start, edit.end, plan.old_name
                )));
            }
            previous_end = edit.end;
        }
    }

    // Splice the new name into each affected file.
    let mut sources = program.sources.clone();
    for (&file_raw, edits) in &edits_by_file {
        let file_id = canon_source::FileId::from_raw(file_raw);
        let content = &program.sources.get_file(file_id).content;
        let mut rewritten = String::with_capacity(
            (content.len() as i64 + delta * edits.len() as i64) as usize,
        );
        let mut cursor = 0usize;
        for edit in edits {
            rewritten.push_str(&content[cursor..edit.start as usize]);
            rewritten.push_str(&plan.new_name);
            cursor = edit.end as usize;
        }
        rewritten.push_str(&content[cursor..]);
        sources = sources.with_file_content(file_id, rewritten);
    }

    // Remap every span in the model to the rewritten offsets.
    let new_ident = interner.get_or_intern(&plan.new_name);
    let mut decls = program.decls.clone();
    for index in 0..decls.len() {
        let id = canon_model::DeclId::from_raw(index as u32);
        let decl = decls.get_mut(id);
        decl.span = remap_span(decl.span, &edits_by_file, delta, new_len)?;
        if id == plan.decl {
            decl.name = new_ident;
        }
    }
    let mut references = program.references.clone();
    for reference in &mut references {
        reference.span = remap_span(reference.span, &edits_by_file, delta, new_len)?;
    }

    Ok(Program {
        decls,
        references,
        sources,
    })
}

/// Maps a pre-edit span to its post-edit location.
///
/// Spans at an edited site take the new name's length; spans after edited
/// sites shift by the accumulated length difference; spans before them are
/// unchanged. A span that straddles an edit means the model and the plan
/// disagree about token boundaries, which fails the rename.
fn remap_span(
    span: Span,
    edits_by_file: &BTreeMap<u32, Vec<Span>>,
    delta: i64,
    new_len: u32,
) -> Result<Span, RenameError> {
    let Some(edits) = edits_by_file.get(&span.file.as_raw()) else {
        return Ok(span);
    };
    let mut preceding = 0i64;
    for edit in edits {
        if edit.end <= span.start {
            preceding += 1;
            continue;
        }
        if edit.start == span.start && edit.end == span.end {
            let new_start = (span.start as i64 + preceding * delta) as u32;
            return Ok(Span::new(span.file, new_start, new_start + new_len));
        }
        if edit.start >= span.end {
            break;
        }
        return Err(RenameError::ReferenceEnumeration(format!(
            "span {}..{} straddles a rename site",
            span.start, span.end
        )));
    }
    Ok(span.shifted(preceding * delta))
}
