//! The immutable per-unit compile configuration.

use super::profile::Profile;
use super::stage::Stage;
use super::target::TargetConfig;

/// Configuration of one compile unit.
///
/// Built once from the `#version` line and the driver's target selection,
/// then read-only for the life of the unit. Configuration is passed
/// explicitly; there is no global state, so concurrent compiles simply
/// construct one configuration (and one gate) each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompileConfig {
    /// The active profile (exactly one).
    pub profile: Profile,
    /// The numeric language version, e.g. 110, 300, 450.
    pub version: u32,
    /// The active shader stage (exactly one).
    pub stage: Stage,
    /// Code-generation target.
    pub target: TargetConfig,
    /// Turn deprecation warnings into hard errors.
    pub forward_compatible: bool,
    /// Downgrade certain missing-extension errors into warnings.
    pub relaxed_errors: bool,
    /// Drop all warnings (errors are never suppressed).
    pub suppress_warnings: bool,
}

impl CompileConfig {
    /// Configuration for a plain GLSL unit with all policy flags off.
    pub fn new(profile: Profile, version: u32, stage: Stage) -> Self {
        Self {
            profile,
            version,
            stage,
            target: TargetConfig::glsl(),
            forward_compatible: false,
            relaxed_errors: false,
            suppress_warnings: false,
        }
    }

    /// Set the code-generation target.
    pub fn with_target(mut self, target: TargetConfig) -> Self {
        self.target = target;
        self
    }

    /// Set forward-compatible mode.
    pub fn with_forward_compatible(mut self, forward_compatible: bool) -> Self {
        self.forward_compatible = forward_compatible;
        self
    }

    /// Set relaxed-errors mode.
    pub fn with_relaxed_errors(mut self, relaxed_errors: bool) -> Self {
        self.relaxed_errors = relaxed_errors;
        self
    }

    /// Set global warning suppression.
    pub fn with_suppressed_warnings(mut self, suppress_warnings: bool) -> Self {
        self.suppress_warnings = suppress_warnings;
        self
    }
}
