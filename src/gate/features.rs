//! Composite checks for data types gated by several rules at once.
//!
//! These bundle the profile/version/extension calls a feature path would
//! otherwise repeat at every use site.

use crate::base::Span;
use crate::config::ProfileMask;
use crate::diagnostics::DiagnosticSink;
use crate::extensions::ExtensionId;

use super::FeatureGate;

impl<S: DiagnosticSink> FeatureGate<S> {
    /// Full integer data-type support: desktop needs 130, ES needs 300.
    pub fn full_integer_check(&mut self, span: Span, feature: &str) {
        self.profile_requires(span, ProfileMask::NO_PROFILE, 130, &[], feature);
        self.profile_requires(span, ProfileMask::ES, 300, &[], feature);
    }

    /// `double` data-type support: desktop profiles at 400.
    pub fn double_check(&mut self, span: Span, feature: &str) {
        self.require_profile(span, ProfileMask::CORE | ProfileMask::COMPATIBILITY, feature);
        self.profile_requires(span, ProfileMask::CORE, 400, &[], feature);
        self.profile_requires(span, ProfileMask::COMPATIBILITY, 400, &[], feature);
    }

    /// 64-bit integer data-type support: desktop profiles at 450 with the
    /// ARB extension. Built-in declarations skip the check.
    pub fn int64_check(&mut self, span: Span, feature: &str, builtin: bool) {
        if builtin {
            return;
        }
        self.require_extensions(span, &[ExtensionId::ArbGpuShaderInt64], "shader int64");
        self.require_profile(span, ProfileMask::CORE | ProfileMask::COMPATIBILITY, feature);
        self.profile_requires(span, ProfileMask::CORE, 450, &[], feature);
        self.profile_requires(span, ProfileMask::COMPATIBILITY, 450, &[], feature);
    }
}
