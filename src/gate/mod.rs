//! The compatibility gate consulted at parser checkpoints.
//!
//! A feature path in the parser declares what enables it by calling a
//! handful of gate operations:
//!
//! - [`FeatureGate::require_profile`]
//! - [`FeatureGate::profile_requires`]
//! - [`FeatureGate::require_stage`]
//! - [`FeatureGate::check_deprecated`]
//! - [`FeatureGate::require_not_removed`]
//! - [`FeatureGate::require_extensions`]
//!
//! None of these return error codes: the presumption is that parsing
//! always continues as if the tested feature were enabled, so there is no
//! error recovery to do. Failed checks record diagnostics in the sink and
//! return normally.

mod checks;
mod directive;
mod features;

use crate::config::CompileConfig;
use crate::diagnostics::{Diagnostic, DiagnosticCollector, DiagnosticSink};
use crate::extensions::{Behavior, BehaviorState, ExtensionId};

/// Feature gate for one compile unit.
///
/// Owns the unit's configuration, its extension behavior table, the record
/// of requested extensions, and the diagnostic sink. One gate per unit;
/// concurrent compiles construct independent gates.
pub struct FeatureGate<S: DiagnosticSink = DiagnosticCollector> {
    config: CompileConfig,
    behavior: BehaviorState,
    requested: Vec<ExtensionId>,
    sink: S,
}

impl FeatureGate<DiagnosticCollector> {
    /// Gate for one compile unit, collecting diagnostics internally.
    pub fn new(config: CompileConfig) -> Self {
        Self::with_sink(config, DiagnosticCollector::new())
    }

    /// Diagnostics recorded so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.sink.diagnostics()
    }

    /// Check if any recorded diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.sink.has_errors()
    }

    /// Consume the gate, returning everything it recorded.
    pub fn finish(mut self) -> Vec<Diagnostic> {
        self.sink.take()
    }
}

impl<S: DiagnosticSink> FeatureGate<S> {
    /// Gate writing into a caller-supplied sink.
    pub fn with_sink(config: CompileConfig, sink: S) -> Self {
        Self {
            config,
            behavior: BehaviorState::from_registry_defaults(),
            requested: Vec::new(),
            sink,
        }
    }

    /// The unit's configuration.
    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// The stored behavior of a registered extension.
    pub fn behavior_of(&self, id: ExtensionId) -> Behavior {
        self.behavior.get(id)
    }

    /// Extensions requested via enable/require directives, in
    /// first-request order. Downstream consumers record these in build
    /// metadata.
    pub fn requested_extensions(&self) -> &[ExtensionId] {
        &self.requested
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn emit(&mut self, diagnostic: Diagnostic) {
        self.sink.emit(diagnostic);
    }
}
