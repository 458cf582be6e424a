//! Diagnostic creation, severity management, and rendering.
//!
//! Rule findings are structured [`Diagnostic`] values: a severity, a stable
//! [`DiagnosticCode`], a message, source labels, and optionally a
//! [`SuggestedFix`] that a fixer can apply mechanically. The thread-safe
//! [`DiagnosticSink`] accumulates findings while rules run in parallel, and
//! [`DiagnosticRenderer`] implementations format them for the terminal or
//! for machine consumption.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod label;
pub mod renderer;
pub mod severity;
pub mod sink;
pub mod suggested_fix;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use label::{Label, LabelStyle};
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
pub use suggested_fix::{Replacement, SuggestedFix};
