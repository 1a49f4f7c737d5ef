//! Shared helpers for gate integration tests.

#![allow(dead_code)] // not every test binary uses every helper

use glslgate::{CompileConfig, ErrorCode, FeatureGate, Profile, Severity, Stage};

/// Gate over a unit with the given profile/version/stage and default flags.
pub fn gate_for(profile: Profile, version: u32, stage: Stage) -> FeatureGate {
    FeatureGate::new(CompileConfig::new(profile, version, stage))
}

/// Gate over a desktop core-profile vertex unit.
pub fn core_gate(version: u32) -> FeatureGate {
    gate_for(Profile::Core, version, Stage::Vertex)
}

/// Gate over an ES fragment unit.
pub fn es_gate(version: u32) -> FeatureGate {
    gate_for(Profile::Es, version, Stage::Fragment)
}

/// Codes of all error-severity diagnostics, in emission order.
pub fn error_codes(gate: &FeatureGate) -> Vec<ErrorCode> {
    gate.diagnostics()
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .map(|d| d.code)
        .collect()
}

/// Codes of all warning-severity diagnostics, in emission order.
pub fn warning_codes(gate: &FeatureGate) -> Vec<ErrorCode> {
    gate.diagnostics()
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .map(|d| d.code)
        .collect()
}

/// Assert a gate recorded nothing at all.
pub fn assert_clean(gate: &FeatureGate) {
    assert!(
        gate.diagnostics().is_empty(),
        "Expected no diagnostics, got {}:\n{}",
        gate.diagnostics().len(),
        gate.diagnostics()
            .iter()
            .map(|d| format!("  {}", d.format()))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
