//! The diagnostic value type.

use smol_str::SmolStr;

use crate::base::Span;

use super::codes::ErrorCode;

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// A diagnostic recorded by the gate.
///
/// Diagnostics are plain values; recording one never interrupts parsing.
/// The driver decides at the end of the unit whether accumulated errors
/// fail the build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Human-readable message.
    pub message: String,
    /// Source location the parser supplied for the checkpoint.
    pub span: Span,
    /// Categorized error code.
    pub code: ErrorCode,
    /// Severity level.
    pub severity: Severity,
    /// Follow-up lines, e.g. candidate extension names.
    pub notes: Vec<SmolStr>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(span: Span, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span,
            code,
            severity: Severity::Error,
            notes: Vec::new(),
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(span: Span, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span,
            code,
            severity: Severity::Warning,
            notes: Vec::new(),
        }
    }

    /// Create a new informational diagnostic.
    pub fn info(span: Span, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span,
            code,
            severity: Severity::Info,
            notes: Vec::new(),
        }
    }

    /// Add a follow-up note.
    pub fn with_note(mut self, note: impl Into<SmolStr>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Check if this diagnostic has notes
    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }

    /// Format the diagnostic for display
    pub fn format(&self) -> String {
        let mut result = format!("{}: {}", self.code, self.message);
        for note in &self.notes {
            result.push_str("\n  ");
            result.push_str(note);
        }
        result
    }
}
