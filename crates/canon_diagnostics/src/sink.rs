//! Thread-safe accumulator for findings emitted by concurrent rule runs.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// A thread-safe accumulator for diagnostics.
///
/// The lint engine checks declarations from rayon worker threads; each
/// worker emits into the same sink. The error count is tracked atomically so
/// `has_errors` never takes the vector lock.
pub struct DiagnosticSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
    error_count: AtomicUsize,
}

impl DiagnosticSink {
    /// Creates a new empty sink.
    pub fn new() -> Self {
        Self {
            diagnostics: Mutex::new(Vec::new()),
            error_count: AtomicUsize::new(0),
        }
    }

    /// Emits a diagnostic into the sink.
    pub fn emit(&self, diag: Diagnostic) {
        if diag.severity == Severity::Error {
            self.error_count.fetch_add(1, Ordering::Relaxed);
        }
        let mut diagnostics = self.diagnostics.lock().unwrap();
        diagnostics.push(diag);
    }

    /// Returns `true` if any error-severity diagnostics have been emitted.
    pub fn has_errors(&self) -> bool {
        self.error_count.load(Ordering::Relaxed) > 0
    }

    /// Returns the number of error-severity diagnostics emitted so far.
    pub fn error_count(&self) -> usize {
        self.error_count.load(Ordering::Relaxed)
    }

    /// Takes all accumulated diagnostics, leaving the sink empty.
    pub fn take_all(&self) -> Vec<Diagnostic> {
        let mut diagnostics = self.diagnostics.lock().unwrap();
        std::mem::take(&mut *diagnostics)
    }

    /// Returns a snapshot of all accumulated diagnostics without draining.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().unwrap().clone()
    }
}

impl Default for DiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{Category, DiagnosticCode};
    use canon_source::Span;

    fn naming_warning() -> Diagnostic {
        Diagnostic::warning(
            DiagnosticCode::new(Category::Naming, 1),
            "field name violates convention",
            Span::DUMMY,
        )
    }

    fn model_error() -> Diagnostic {
        Diagnostic::error(
            DiagnosticCode::new(Category::Error, 1),
            "dangling reference",
            Span::DUMMY,
        )
    }

    #[test]
    fn empty_sink() {
        let sink = DiagnosticSink::new();
        assert!(!sink.has_errors());
        assert!(sink.take_all().is_empty());
    }

    #[test]
    fn warnings_are_not_errors() {
        let sink = DiagnosticSink::new();
        sink.emit(naming_warning());
        assert!(!sink.has_errors());
        assert_eq!(sink.diagnostics().len(), 1);
    }

    #[test]
    fn errors_are_counted() {
        let sink = DiagnosticSink::new();
        sink.emit(model_error());
        sink.emit(naming_warning());
        assert!(sink.has_errors());
        assert_eq!(sink.error_count(), 1);
    }

    #[test]
    fn take_all_drains() {
        let sink = DiagnosticSink::new();
        sink.emit(naming_warning());
        assert_eq!(sink.take_all().len(), 1);
        assert!(sink.take_all().is_empty());
    }

    #[test]
    fn concurrent_emission() {
        use std::sync::Arc;
        use std::thread;

        let sink = Arc::new(DiagnosticSink::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let sink = Arc::clone(&sink);
            handles.push(thread::spawn(move || {
                for _ in 0..50 {
                    sink.emit(naming_warning());
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(sink.diagnostics().len(), 400);
        assert!(!sink.has_errors());
    }
}
