//! Rendering backends for human-readable diagnostic output.

use crate::diagnostic::Diagnostic;
use crate::label::LabelStyle;
use canon_source::SourceDb;

/// Trait for rendering diagnostics into formatted output strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic into a formatted string.
    fn render(&self, diag: &Diagnostic, sources: &SourceDb) -> String;
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// warning[N001]: field name violates convention
///   --> src/Account.cs:14:17
///    |
/// 14 |     private int m_total;
///    |                 ^^^^^^^ rename this field to '_total'
///    |
///    = help: apply the suggested rename
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic, sources: &SourceDb) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{}[{}]: {}\n",
            diag.severity, diag.code, diag.message
        ));

        if !diag.primary_span.is_dummy() {
            let resolved = sources.resolve_span(diag.primary_span);
            out.push_str(&format!("  --> {resolved}\n"));

            let file = sources.get_file(diag.primary_span.file);
            let (line, col) = file.line_col(diag.primary_span.start);
            let line_num = format!("{line}");
            let padding = " ".repeat(line_num.len());

            let line_content = source_line(&file.content, diag.primary_span.start);

            out.push_str(&format!("{padding} |\n"));
            out.push_str(&format!("{line_num} | {line_content}\n"));

            let span_len = (diag.primary_span.end - diag.primary_span.start).max(1) as usize;
            let carets = "^".repeat(span_len);
            let col_padding = " ".repeat((col as usize).saturating_sub(1));

            let primary_msg = diag
                .labels
                .iter()
                .find(|l| l.style == LabelStyle::Primary)
                .map(|l| format!(" {}", l.message))
                .unwrap_or_default();

            out.push_str(&format!("{padding} | {col_padding}{carets}{primary_msg}\n"));
        }

        for note in &diag.notes {
            out.push_str(&format!("   = note: {note}\n"));
        }

        for help in &diag.help {
            out.push_str(&format!("   = help: {help}\n"));
        }

        out
    }
}

/// Extracts the line of source text containing the given byte offset.
fn source_line(content: &str, byte_offset: u32) -> &str {
    let offset = byte_offset as usize;
    let start = content[..offset].rfind('\n').map_or(0, |pos| pos + 1);
    let end = content[offset..]
        .find('\n')
        .map_or(content.len(), |pos| offset + pos);
    &content[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{Category, DiagnosticCode};
    use crate::label::Label;
    use canon_source::Span;

    #[test]
    fn render_warning_with_span() {
        let mut sources = SourceDb::new();
        let file_id = sources.add_source("Account.cs", "private int m_total;\n".to_string());

        let code = DiagnosticCode::new(Category::Naming, 1);
        let span = Span::new(file_id, 12, 19);
        let diag = Diagnostic::warning(code, "field name violates convention", span)
            .with_label(Label::primary(span, "rename this field to '_total'"));

        let renderer = TerminalRenderer::new(false);
        let output = renderer.render(&diag, &sources);

        assert!(output.contains("warning[N001]: field name violates convention"));
        assert!(output.contains("--> Account.cs:1:13"));
        assert!(output.contains("private int m_total;"));
        assert!(output.contains("^^^^^^^ rename this field to '_total'"));
    }

    #[test]
    fn render_with_notes_and_help() {
        let sources = SourceDb::new();
        let code = DiagnosticCode::new(Category::Practice, 102);
        let diag = Diagnostic::warning(code, "missing access modifier", Span::DUMMY)
            .with_note("the declared visibility defaults to private")
            .with_help("state the access modifier explicitly");

        let renderer = TerminalRenderer::new(false);
        let output = renderer.render(&diag, &sources);

        assert!(output.contains("warning[P102]: missing access modifier"));
        assert!(output.contains("= note: the declared visibility defaults to private"));
        assert!(output.contains("= help: state the access modifier explicitly"));
    }

    #[test]
    fn render_dummy_span_omits_excerpt() {
        let sources = SourceDb::new();
        let code = DiagnosticCode::new(Category::Error, 1);
        let diag = Diagnostic::error(code, "model import failed", Span::DUMMY);

        let renderer = TerminalRenderer::new(false);
        let output = renderer.render(&diag, &sources);

        assert!(output.contains("error[E001]: model import failed"));
        assert!(!output.contains("-->"));
    }
}
