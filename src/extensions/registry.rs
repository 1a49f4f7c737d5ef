//! The extension registry.
//!
//! Every extension the front end knows about, as a closed enum. Almost all
//! extensions default to disabled: once a feature is incorporated into a
//! core version, it is supported through that version check, not through a
//! pseudo-enablement of the extension.

use std::fmt;

use super::behavior::Behavior;

/// A registered extension identifier.
///
/// [`ExtensionId::as_str`] yields the canonical name used in source text
/// and diagnostics; [`ExtensionId::from_name`] is the reverse lookup and
/// returns `None` for text the registry does not know, which directive
/// processing reports as an unsupported extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExtensionId {
    // =========================================================================
    // OES/EXT/ARB desktop and ES staples
    // =========================================================================
    OesTexture3D,
    OesStandardDerivatives,
    ExtFragDepth,
    OesEglImageExternal,
    ExtShaderTextureLod,
    ExtShadowSamplers,
    ArbTextureRectangle,
    ThreeDlArrayObjects,
    ArbShadingLanguage420pack,
    ArbTextureGather,
    ArbGpuShader5,
    ArbSeparateShaderObjects,
    ArbComputeShader,
    ArbTessellationShader,
    ArbEnhancedLayouts,
    ArbTextureCubeMapArray,
    ArbShaderTextureLod,
    ArbExplicitAttribLocation,
    ArbShaderImageLoadStore,
    ArbShaderAtomicCounters,
    ArbShaderDrawParameters,
    ArbShaderGroupVote,
    ArbDerivativeControl,
    ArbShaderTextureImageSamples,
    ArbViewportArray,
    ArbGpuShaderInt64,
    ArbShaderBallot,
    ArbSparseTexture2,
    ArbSparseTextureClamp,
    ArbShaderStencilExport,
    ArbPostDepthCoverage,
    ArbShaderViewportLayerArray,

    ExtShaderNonConstantGlobalInitializers,
    ExtShaderImageLoadFormatted,
    ExtPostDepthCoverage,

    // #line and #include
    GoogleCppStyleLineDirective,
    GoogleIncludeDirective,

    // =========================================================================
    // AMD vendor extensions
    // =========================================================================
    AmdShaderBallot,
    AmdShaderTrinaryMinmax,
    AmdShaderExplicitVertexParameter,
    AmdGcnShader,
    AmdGpuShaderHalfFloat,
    AmdTextureGatherBiasLod,
    AmdGpuShaderInt16,
    AmdShaderImageLoadStoreLod,

    // =========================================================================
    // NV vendor extensions
    // =========================================================================
    NvSampleMaskOverrideCoverage,
    SpvNvGeometryShaderPassthrough,
    NvViewportArray2,
    NvStereoViewRendering,
    NvxMultiviewPerViewAttributes,

    // =========================================================================
    // AEP (Android extension pack) umbrella and members
    // =========================================================================
    AndroidExtensionPackEs31a,
    KhrBlendEquationAdvanced,
    OesSampleVariables,
    OesShaderImageAtomic,
    OesShaderMultisampleInterpolation,
    OesTextureStorageMultisample2dArray,
    ExtGeometryShader,
    ExtGeometryPointSize,
    ExtGpuShader5,
    ExtPrimitiveBoundingBox,
    ExtShaderIoBlocks,
    ExtTessellationShader,
    ExtTessellationPointSize,
    ExtTextureBuffer,
    ExtTextureCubeMapArray,

    // =========================================================================
    // OES extensions matching AEP
    // =========================================================================
    OesGeometryShader,
    OesGeometryPointSize,
    OesGpuShader5,
    OesPrimitiveBoundingBox,
    OesShaderIoBlocks,
    OesTessellationShader,
    OesTessellationPointSize,
    OesTextureBuffer,
    OesTextureCubeMapArray,

    // =========================================================================
    // Device group / multiview
    // =========================================================================
    ExtDeviceGroup,
    ExtMultiview,
    OvrMultiview,
    OvrMultiview2,
}

impl ExtensionId {
    /// Every registered extension, in registry order.
    pub const ALL: &'static [ExtensionId] = &[
        Self::OesTexture3D,
        Self::OesStandardDerivatives,
        Self::ExtFragDepth,
        Self::OesEglImageExternal,
        Self::ExtShaderTextureLod,
        Self::ExtShadowSamplers,
        Self::ArbTextureRectangle,
        Self::ThreeDlArrayObjects,
        Self::ArbShadingLanguage420pack,
        Self::ArbTextureGather,
        Self::ArbGpuShader5,
        Self::ArbSeparateShaderObjects,
        Self::ArbComputeShader,
        Self::ArbTessellationShader,
        Self::ArbEnhancedLayouts,
        Self::ArbTextureCubeMapArray,
        Self::ArbShaderTextureLod,
        Self::ArbExplicitAttribLocation,
        Self::ArbShaderImageLoadStore,
        Self::ArbShaderAtomicCounters,
        Self::ArbShaderDrawParameters,
        Self::ArbShaderGroupVote,
        Self::ArbDerivativeControl,
        Self::ArbShaderTextureImageSamples,
        Self::ArbViewportArray,
        Self::ArbGpuShaderInt64,
        Self::ArbShaderBallot,
        Self::ArbSparseTexture2,
        Self::ArbSparseTextureClamp,
        Self::ArbShaderStencilExport,
        Self::ArbPostDepthCoverage,
        Self::ArbShaderViewportLayerArray,
        Self::ExtShaderNonConstantGlobalInitializers,
        Self::ExtShaderImageLoadFormatted,
        Self::ExtPostDepthCoverage,
        Self::GoogleCppStyleLineDirective,
        Self::GoogleIncludeDirective,
        Self::AmdShaderBallot,
        Self::AmdShaderTrinaryMinmax,
        Self::AmdShaderExplicitVertexParameter,
        Self::AmdGcnShader,
        Self::AmdGpuShaderHalfFloat,
        Self::AmdTextureGatherBiasLod,
        Self::AmdGpuShaderInt16,
        Self::AmdShaderImageLoadStoreLod,
        Self::NvSampleMaskOverrideCoverage,
        Self::SpvNvGeometryShaderPassthrough,
        Self::NvViewportArray2,
        Self::NvStereoViewRendering,
        Self::NvxMultiviewPerViewAttributes,
        Self::AndroidExtensionPackEs31a,
        Self::KhrBlendEquationAdvanced,
        Self::OesSampleVariables,
        Self::OesShaderImageAtomic,
        Self::OesShaderMultisampleInterpolation,
        Self::OesTextureStorageMultisample2dArray,
        Self::ExtGeometryShader,
        Self::ExtGeometryPointSize,
        Self::ExtGpuShader5,
        Self::ExtPrimitiveBoundingBox,
        Self::ExtShaderIoBlocks,
        Self::ExtTessellationShader,
        Self::ExtTessellationPointSize,
        Self::ExtTextureBuffer,
        Self::ExtTextureCubeMapArray,
        Self::OesGeometryShader,
        Self::OesGeometryPointSize,
        Self::OesGpuShader5,
        Self::OesPrimitiveBoundingBox,
        Self::OesShaderIoBlocks,
        Self::OesTessellationShader,
        Self::OesTessellationPointSize,
        Self::OesTextureBuffer,
        Self::OesTextureCubeMapArray,
        Self::ExtDeviceGroup,
        Self::ExtMultiview,
        Self::OvrMultiview,
        Self::OvrMultiview2,
    ];

    /// The canonical extension name as it appears in directives.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OesTexture3D => "GL_OES_texture_3D",
            Self::OesStandardDerivatives => "GL_OES_standard_derivatives",
            Self::ExtFragDepth => "GL_EXT_frag_depth",
            Self::OesEglImageExternal => "GL_OES_EGL_image_external",
            Self::ExtShaderTextureLod => "GL_EXT_shader_texture_lod",
            Self::ExtShadowSamplers => "GL_EXT_shadow_samplers",
            Self::ArbTextureRectangle => "GL_ARB_texture_rectangle",
            Self::ThreeDlArrayObjects => "GL_3DL_array_objects",
            Self::ArbShadingLanguage420pack => "GL_ARB_shading_language_420pack",
            Self::ArbTextureGather => "GL_ARB_texture_gather",
            Self::ArbGpuShader5 => "GL_ARB_gpu_shader5",
            Self::ArbSeparateShaderObjects => "GL_ARB_separate_shader_objects",
            Self::ArbComputeShader => "GL_ARB_compute_shader",
            Self::ArbTessellationShader => "GL_ARB_tessellation_shader",
            Self::ArbEnhancedLayouts => "GL_ARB_enhanced_layouts",
            Self::ArbTextureCubeMapArray => "GL_ARB_texture_cube_map_array",
            Self::ArbShaderTextureLod => "GL_ARB_shader_texture_lod",
            Self::ArbExplicitAttribLocation => "GL_ARB_explicit_attrib_location",
            Self::ArbShaderImageLoadStore => "GL_ARB_shader_image_load_store",
            Self::ArbShaderAtomicCounters => "GL_ARB_shader_atomic_counters",
            Self::ArbShaderDrawParameters => "GL_ARB_shader_draw_parameters",
            Self::ArbShaderGroupVote => "GL_ARB_shader_group_vote",
            Self::ArbDerivativeControl => "GL_ARB_derivative_control",
            Self::ArbShaderTextureImageSamples => "GL_ARB_shader_texture_image_samples",
            Self::ArbViewportArray => "GL_ARB_viewport_array",
            Self::ArbGpuShaderInt64 => "GL_ARB_gpu_shader_int64",
            Self::ArbShaderBallot => "GL_ARB_shader_ballot",
            Self::ArbSparseTexture2 => "GL_ARB_sparse_texture2",
            Self::ArbSparseTextureClamp => "GL_ARB_sparse_texture_clamp",
            Self::ArbShaderStencilExport => "GL_ARB_shader_stencil_export",
            Self::ArbPostDepthCoverage => "GL_ARB_post_depth_coverage",
            Self::ArbShaderViewportLayerArray => "GL_ARB_shader_viewport_layer_array",
            Self::ExtShaderNonConstantGlobalInitializers => {
                "GL_EXT_shader_non_constant_global_initializers"
            }
            Self::ExtShaderImageLoadFormatted => "GL_EXT_shader_image_load_formatted",
            Self::ExtPostDepthCoverage => "GL_EXT_post_depth_coverage",
            Self::GoogleCppStyleLineDirective => "GL_GOOGLE_cpp_style_line_directive",
            Self::GoogleIncludeDirective => "GL_GOOGLE_include_directive",
            Self::AmdShaderBallot => "GL_AMD_shader_ballot",
            Self::AmdShaderTrinaryMinmax => "GL_AMD_shader_trinary_minmax",
            Self::AmdShaderExplicitVertexParameter => "GL_AMD_shader_explicit_vertex_parameter",
            Self::AmdGcnShader => "GL_AMD_gcn_shader",
            Self::AmdGpuShaderHalfFloat => "GL_AMD_gpu_shader_half_float",
            Self::AmdTextureGatherBiasLod => "GL_AMD_texture_gather_bias_lod",
            Self::AmdGpuShaderInt16 => "GL_AMD_gpu_shader_int16",
            Self::AmdShaderImageLoadStoreLod => "GL_AMD_shader_image_load_store_lod",
            Self::NvSampleMaskOverrideCoverage => "GL_NV_sample_mask_override_coverage",
            Self::SpvNvGeometryShaderPassthrough => "SPV_NV_geometry_shader_passthrough",
            Self::NvViewportArray2 => "GL_NV_viewport_array2",
            Self::NvStereoViewRendering => "GL_NV_stereo_view_rendering",
            Self::NvxMultiviewPerViewAttributes => "GL_NVX_multiview_per_view_attributes",
            Self::AndroidExtensionPackEs31a => "GL_ANDROID_extension_pack_es31a",
            Self::KhrBlendEquationAdvanced => "GL_KHR_blend_equation_advanced",
            Self::OesSampleVariables => "GL_OES_sample_variables",
            Self::OesShaderImageAtomic => "GL_OES_shader_image_atomic",
            Self::OesShaderMultisampleInterpolation => "GL_OES_shader_multisample_interpolation",
            Self::OesTextureStorageMultisample2dArray => {
                "GL_OES_texture_storage_multisample_2d_array"
            }
            Self::ExtGeometryShader => "GL_EXT_geometry_shader",
            Self::ExtGeometryPointSize => "GL_EXT_geometry_point_size",
            Self::ExtGpuShader5 => "GL_EXT_gpu_shader5",
            Self::ExtPrimitiveBoundingBox => "GL_EXT_primitive_bounding_box",
            Self::ExtShaderIoBlocks => "GL_EXT_shader_io_blocks",
            Self::ExtTessellationShader => "GL_EXT_tessellation_shader",
            Self::ExtTessellationPointSize => "GL_EXT_tessellation_point_size",
            Self::ExtTextureBuffer => "GL_EXT_texture_buffer",
            Self::ExtTextureCubeMapArray => "GL_EXT_texture_cube_map_array",
            Self::OesGeometryShader => "GL_OES_geometry_shader",
            Self::OesGeometryPointSize => "GL_OES_geometry_point_size",
            Self::OesGpuShader5 => "GL_OES_gpu_shader5",
            Self::OesPrimitiveBoundingBox => "GL_OES_primitive_bounding_box",
            Self::OesShaderIoBlocks => "GL_OES_shader_io_blocks",
            Self::OesTessellationShader => "GL_OES_tessellation_shader",
            Self::OesTessellationPointSize => "GL_OES_tessellation_point_size",
            Self::OesTextureBuffer => "GL_OES_texture_buffer",
            Self::OesTextureCubeMapArray => "GL_OES_texture_cube_map_array",
            Self::ExtDeviceGroup => "GL_EXT_device_group",
            Self::ExtMultiview => "GL_EXT_multiview",
            Self::OvrMultiview => "GL_OVR_multiview",
            Self::OvrMultiview2 => "GL_OVR_multiview2",
        }
    }

    /// Look up an extension by its canonical name.
    ///
    /// Returns `None` for names outside the registry; directive processing
    /// turns that into an unsupported-extension diagnostic.
    pub fn from_name(name: &str) -> Option<ExtensionId> {
        Self::ALL.iter().copied().find(|e| e.as_str() == name)
    }

    /// The behavior a fresh compile unit starts with for this extension.
    pub fn default_behavior(self) -> Behavior {
        match self {
            // Only a subset of gpu_shader5 is implemented.
            Self::ArbGpuShader5 => Behavior::DisablePartial,
            _ => Behavior::Disable,
        }
    }
}

impl fmt::Display for ExtensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
