//! Gate check operations.
//!
//! Message shapes are stable: drivers and tests match on them. Every check
//! takes the source location of the construct and a human-readable feature
//! description used verbatim in the diagnostic.

use crate::base::Span;
use crate::config::{ProfileMask, StageMask};
use crate::diagnostics::{Diagnostic, DiagnosticSink, ErrorCode};
use crate::extensions::{Behavior, ExtensionId};

use super::FeatureGate;

impl<S: DiagnosticSink> FeatureGate<S> {
    /// Require the active profile to be in `allowed`.
    ///
    /// Use when only some profiles support a feature. If the feature is
    /// also version- or extension-dependent within a profile, follow with
    /// [`FeatureGate::profile_requires`].
    pub fn require_profile(&mut self, span: Span, allowed: ProfileMask, feature: &str) {
        if !allowed.contains(self.config.profile) {
            tracing::trace!(feature, profile = %self.config.profile, "profile check failed");
            self.emit(Diagnostic::error(
                span,
                ErrorCode::E0101,
                format!(
                    "not supported with this profile: '{feature}' ({} profile)",
                    self.config.profile
                ),
            ));
        }
    }

    /// Within `allowed` profiles, require a minimum version or one of the
    /// listed extensions.
    ///
    /// Does nothing when the active profile is outside `allowed`; call once
    /// per profile set that needs protection, after `require_profile` has
    /// narrowed the field. A `min_version` of 0 means no version of these
    /// profiles supports the feature in core, so an extension is mandatory.
    pub fn profile_requires(
        &mut self,
        span: Span,
        allowed: ProfileMask,
        min_version: u32,
        extensions: &[ExtensionId],
        feature: &str,
    ) {
        if !allowed.contains(self.config.profile) {
            return;
        }

        let mut okay = min_version > 0 && self.config.version >= min_version;
        for &ext in extensions {
            match self.behavior_of(ext) {
                Behavior::Warn => {
                    self.warn_extension_in_use(span, ext, feature);
                    okay = true;
                }
                Behavior::Enable | Behavior::Require => okay = true,
                Behavior::Disable | Behavior::DisablePartial => {}
            }
        }

        if !okay {
            tracing::trace!(feature, version = self.config.version, "version/extension check failed");
            self.emit(Diagnostic::error(
                span,
                ErrorCode::E0102,
                format!("not supported for this version or the enabled extensions: '{feature}'"),
            ));
        }
    }

    /// Require the active stage to be in `allowed`.
    pub fn require_stage(&mut self, span: Span, allowed: StageMask, feature: &str) {
        if !allowed.contains(self.config.stage) {
            self.emit(Diagnostic::error(
                span,
                ErrorCode::E0201,
                format!(
                    "not supported in this stage: '{feature}' ({} stage)",
                    self.config.stage
                ),
            ));
        }
    }

    /// Within `allowed` profiles, flag a feature deprecated since
    /// `dep_version`.
    ///
    /// Forward-compatible units get an error; everything else gets a
    /// warning unless warnings are suppressed.
    pub fn check_deprecated(
        &mut self,
        span: Span,
        allowed: ProfileMask,
        dep_version: u32,
        feature: &str,
    ) {
        if !allowed.contains(self.config.profile) || self.config.version < dep_version {
            return;
        }

        if self.config.forward_compatible {
            self.emit(Diagnostic::error(
                span,
                ErrorCode::E0103,
                format!("deprecated, may be removed in a future release: '{feature}'"),
            ));
        } else if !self.config.suppress_warnings {
            self.emit(Diagnostic::warning(
                span,
                ErrorCode::E0103,
                format!(
                    "'{feature}' deprecated in version {dep_version}; may be removed in a future release"
                ),
            ));
        }
    }

    /// Within `allowed` profiles, flag a feature removed at
    /// `removed_version` (the first version no longer having it).
    pub fn require_not_removed(
        &mut self,
        span: Span,
        allowed: ProfileMask,
        removed_version: u32,
        feature: &str,
    ) {
        if allowed.contains(self.config.profile) && self.config.version >= removed_version {
            self.emit(Diagnostic::error(
                span,
                ErrorCode::E0104,
                format!(
                    "no longer supported in the {} profile: '{feature}' (removed in version {removed_version})",
                    self.config.profile
                ),
            ));
        }
    }

    /// Require at least one of the listed extensions, with no profile or
    /// version alternative.
    pub fn require_extensions(&mut self, span: Span, extensions: &[ExtensionId], feature: &str) {
        if self.extensions_requested(span, extensions, feature) {
            return;
        }

        match extensions {
            [single] => {
                self.emit(Diagnostic::error(
                    span,
                    ErrorCode::E0301,
                    format!(
                        "required extension not requested: '{feature}' ({})",
                        single.as_str()
                    ),
                ));
            }
            _ => {
                let mut diagnostic = Diagnostic::error(
                    span,
                    ErrorCode::E0301,
                    format!(
                        "required extension not requested: '{feature}'; possible extensions include:"
                    ),
                );
                for &ext in extensions {
                    diagnostic = diagnostic.with_note(ext.as_str());
                }
                self.emit(diagnostic);
            }
        }
    }

    /// True if at least one of the extensions permits the feature, warning
    /// as appropriate.
    ///
    /// Under relaxed errors, a disabled candidate is promoted to a
    /// warning-permit with an explicit must-be-enabled notice.
    fn extensions_requested(
        &mut self,
        span: Span,
        extensions: &[ExtensionId],
        feature: &str,
    ) -> bool {
        if extensions
            .iter()
            .any(|&ext| matches!(self.behavior_of(ext), Behavior::Enable | Behavior::Require))
        {
            return true;
        }

        let mut warned = false;
        for &ext in extensions {
            let mut behavior = self.behavior_of(ext);
            if behavior == Behavior::Disable && self.config.relaxed_errors {
                self.emit(
                    Diagnostic::warning(
                        span,
                        ErrorCode::E0301,
                        format!("the following extension must be enabled to use '{feature}':"),
                    )
                    .with_note(ext.as_str()),
                );
                behavior = Behavior::Warn;
            }
            if behavior == Behavior::Warn {
                self.warn_extension_in_use(span, ext, feature);
                warned = true;
            }
        }
        warned
    }

    /// Usage warning for an extension with warn behavior.
    fn warn_extension_in_use(&mut self, span: Span, ext: ExtensionId, feature: &str) {
        self.emit(Diagnostic::warning(
            span,
            ErrorCode::E0306,
            format!("extension {} is being used for '{feature}'", ext.as_str()),
        ));
    }

    /// Flag an operation only allowed under Vulkan semantics.
    pub fn require_vulkan(&mut self, span: Span, feature: &str) {
        if self.config.target.vulkan_semantics == 0 {
            self.emit(Diagnostic::error(
                span,
                ErrorCode::E0401,
                format!("only allowed when using GLSL for Vulkan: '{feature}'"),
            ));
        }
    }

    /// Flag an operation removed under Vulkan semantics.
    pub fn vulkan_removed(&mut self, span: Span, feature: &str) {
        if self.config.target.vulkan_semantics >= 100 {
            self.emit(Diagnostic::error(
                span,
                ErrorCode::E0402,
                format!("not allowed when using GLSL for Vulkan: '{feature}'"),
            ));
        }
    }

    /// Flag an operation only allowed when generating SPIR-V.
    pub fn require_spv(&mut self, span: Span, feature: &str) {
        if !self.config.target.generating_spirv {
            self.emit(Diagnostic::error(
                span,
                ErrorCode::E0403,
                format!("only allowed when generating SPIR-V: '{feature}'"),
            ));
        }
    }

    /// Flag an operation removed when generating SPIR-V.
    pub fn spv_removed(&mut self, span: Span, feature: &str) {
        if self.config.target.generating_spirv {
            self.emit(Diagnostic::error(
                span,
                ErrorCode::E0404,
                format!("not allowed when generating SPIR-V: '{feature}'"),
            ));
        }
    }

    /// Unconditional error for a recognized but unimplemented feature.
    pub fn not_implemented(&mut self, span: Span, feature: &str) {
        self.emit(Diagnostic::error(
            span,
            ErrorCode::E0901,
            format!("feature not yet implemented: '{feature}'"),
        ));
    }

    /// True if the extension is set to enable, require, or warn.
    pub fn extension_turned_on(&self, ext: ExtensionId) -> bool {
        self.behavior_of(ext).permits()
    }

    /// True if any of the extensions is set to enable, require, or warn.
    pub fn extensions_turned_on(&self, extensions: &[ExtensionId]) -> bool {
        extensions.iter().any(|&ext| self.extension_turned_on(ext))
    }
}
