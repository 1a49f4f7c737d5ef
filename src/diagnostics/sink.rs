//! Diagnostic sinks.

use super::diagnostic::{Diagnostic, Severity};

/// Where gate diagnostics go.
///
/// The sink owns storage and formatting decisions; the gate only appends.
/// Implementations must not fail: `emit` has no way to report an error
/// back, by contract.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics for one compile unit.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Take all diagnostics, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Clear all diagnostics.
    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Span;
    use crate::diagnostics::ErrorCode;

    #[test]
    fn test_collector_counts() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(Diagnostic::error(Span::default(), ErrorCode::E0101, "error 1"));
        collector.emit(Diagnostic::error(Span::default(), ErrorCode::E0102, "error 2"));
        collector.emit(Diagnostic::warning(Span::default(), ErrorCode::E0306, "warning 1"));

        assert_eq!(collector.error_count(), 2);
        assert_eq!(collector.warning_count(), 1);
        assert!(collector.has_errors());
    }

    #[test]
    fn test_collector_take_empties() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(Diagnostic::warning(Span::default(), ErrorCode::E0305, "w"));

        let taken = collector.take();
        assert_eq!(taken.len(), 1);
        assert!(collector.diagnostics().is_empty());
        assert!(!collector.has_errors());
    }

    #[test]
    fn test_collector_clear() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(Diagnostic::error(Span::default(), ErrorCode::E0901, "e"));
        collector.clear();
        assert_eq!(collector.error_count(), 0);
    }
}
