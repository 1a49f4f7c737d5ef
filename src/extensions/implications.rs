//! The umbrella-extension implication table.
//!
//! Some directives implicitly change more than the named extension: the
//! Android extension pack stands for a whole feature set, and the geometry
//! and tessellation extensions carry their io-block dependency with them.
//! The static table below makes that propagation set auditable; directive
//! processing walks it with a worklist.

use super::registry::ExtensionId::{self, *};

/// Directed implication edges: a directive applied to the trigger is
/// re-applied to every implied extension, transitively.
pub const IMPLICATIONS: &[(ExtensionId, &[ExtensionId])] = &[
    (
        AndroidExtensionPackEs31a,
        &[
            KhrBlendEquationAdvanced,
            OesSampleVariables,
            OesShaderImageAtomic,
            OesShaderMultisampleInterpolation,
            OesTextureStorageMultisample2dArray,
            ExtGeometryShader,
            ExtGpuShader5,
            ExtPrimitiveBoundingBox,
            ExtShaderIoBlocks,
            ExtTessellationShader,
            ExtTextureBuffer,
            ExtTextureCubeMapArray,
        ],
    ),
    // geometry and tessellation need io blocks
    (ExtGeometryShader, &[ExtShaderIoBlocks]),
    (OesGeometryShader, &[OesShaderIoBlocks]),
    (ExtTessellationShader, &[ExtShaderIoBlocks]),
    (OesTessellationShader, &[OesShaderIoBlocks]),
    // #include implies cpp-style #line
    (GoogleIncludeDirective, &[GoogleCppStyleLineDirective]),
];

/// Extensions directly implied by `trigger`, or an empty slice.
pub fn implied_by(trigger: ExtensionId) -> &'static [ExtensionId] {
    IMPLICATIONS
        .iter()
        .find(|(candidate, _)| *candidate == trigger)
        .map(|(_, implied)| *implied)
        .unwrap_or(&[])
}
