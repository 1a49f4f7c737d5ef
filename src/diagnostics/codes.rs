//! Error code definitions for gate diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Profile/version errors
//! - E02xx: Stage errors
//! - E03xx: Extension and directive errors
//! - E04xx: Target errors (SPIR-V, Vulkan)
//! - E09xx: Generic/fallback errors

use std::fmt;

/// Error codes for gate diagnostics
///
/// Each code represents a specific category of compatibility failure,
/// enabling filtering, documentation, and IDE integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Profile/version errors
    // =========================================================================
    /// Feature not supported with the active profile
    E0101,
    /// Feature needs a higher version or an enabled extension
    E0102,
    /// Feature deprecated at the active version
    E0103,
    /// Feature removed at the active version
    E0104,

    // =========================================================================
    // E02xx: Stage errors
    // =========================================================================
    /// Feature not supported in the active stage
    E0201,

    // =========================================================================
    // E03xx: Extension and directive errors
    // =========================================================================
    /// Required extension not requested
    E0301,
    /// Extension unknown to this front end
    E0302,
    /// Invalid `#extension` behavior token
    E0303,
    /// Invalid behavior for the `all` extension
    E0304,
    /// Extension only partially supported
    E0305,
    /// Extension with warn behavior is being used
    E0306,

    // =========================================================================
    // E04xx: Target errors
    // =========================================================================
    /// Feature only allowed under Vulkan semantics
    E0401,
    /// Feature removed under Vulkan semantics
    E0402,
    /// Feature only allowed when generating SPIR-V
    E0403,
    /// Feature removed when generating SPIR-V
    E0404,

    // =========================================================================
    // E09xx: Generic/fallback errors
    // =========================================================================
    /// Feature not yet implemented
    E0901,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0101")
    pub fn as_str(&self) -> &'static str {
        match self {
            // Profile/version
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0104 => "E0104",
            // Stage
            Self::E0201 => "E0201",
            // Extension/directive
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0304 => "E0304",
            Self::E0305 => "E0305",
            Self::E0306 => "E0306",
            // Target
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
            Self::E0403 => "E0403",
            Self::E0404 => "E0404",
            // Generic
            Self::E0901 => "E0901",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 | Self::E0103 | Self::E0104 => "profile/version error",
            Self::E0201 => "stage error",
            Self::E0301 | Self::E0302 | Self::E0303 | Self::E0304 | Self::E0305 | Self::E0306 => {
                "extension error"
            }
            Self::E0401 | Self::E0402 | Self::E0403 | Self::E0404 => "target error",
            Self::E0901 => "feature error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            // Profile/version
            Self::E0101 => "not supported with this profile",
            Self::E0102 => "not supported for this version or the enabled extensions",
            Self::E0103 => "deprecated feature",
            Self::E0104 => "removed feature",
            // Stage
            Self::E0201 => "not supported in this stage",
            // Extension/directive
            Self::E0301 => "required extension not requested",
            Self::E0302 => "extension not supported",
            Self::E0303 => "behavior not supported",
            Self::E0304 => "invalid behavior for 'all'",
            Self::E0305 => "extension is only partially supported",
            Self::E0306 => "extension is being used",
            // Target
            Self::E0401 => "only allowed when using GLSL for Vulkan",
            Self::E0402 => "not allowed when using GLSL for Vulkan",
            Self::E0403 => "only allowed when generating SPIR-V",
            Self::E0404 => "not allowed when generating SPIR-V",
            // Generic
            Self::E0901 => "feature not yet implemented",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
