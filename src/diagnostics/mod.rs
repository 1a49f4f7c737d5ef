//! Diagnostics for gate decisions.
//!
//! Every gate operation that rejects a feature records a diagnostic and
//! returns; nothing in this crate raises an error through control flow.
//! This module provides:
//! - Categorized error codes for filtering and documentation
//! - A diagnostic value type with severity, span, and follow-up notes
//! - A sink trait plus the default in-memory collector

mod codes;
mod diagnostic;
mod sink;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, Severity};
pub use sink::{DiagnosticCollector, DiagnosticSink};
