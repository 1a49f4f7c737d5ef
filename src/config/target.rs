//! Code-generation target description.

/// The code-generation target of a compile unit.
///
/// All fields default to "plain GLSL": no SPIR-V, no Vulkan semantics.
/// A version field of 0 means the corresponding target is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetConfig {
    /// True when the unit compiles to SPIR-V (any flavor).
    pub generating_spirv: bool,
    /// Vulkan GLSL semantics version, or 0 when not targeting Vulkan.
    pub vulkan_semantics: u32,
    /// SPIR-V-under-OpenGL version, or 0 when SPIR-V is not being generated
    /// for an OpenGL context.
    pub opengl_spirv: u32,
}

impl TargetConfig {
    /// Plain GLSL for an OpenGL context.
    pub fn glsl() -> Self {
        Self::default()
    }

    /// GLSL compiled to SPIR-V under Vulkan semantics.
    pub fn vulkan(version: u32) -> Self {
        Self {
            generating_spirv: true,
            vulkan_semantics: version,
            opengl_spirv: 0,
        }
    }

    /// GLSL compiled to SPIR-V for an OpenGL context.
    pub fn opengl_spirv(version: u32) -> Self {
        Self {
            generating_spirv: true,
            vulkan_semantics: 0,
            opengl_spirv: version,
        }
    }
}
