//! Gate Tests - Check Operations
//!
//! These tests verify the gate's decision API: profile, version, stage,
//! deprecation, removal, extension, and target checks. Every operation
//! records diagnostics and returns; none may interrupt the caller.

mod helpers;

use helpers::{assert_clean, core_gate, error_codes, es_gate, gate_for, warning_codes};

use glslgate::{
    CompileConfig, ErrorCode, ExtensionId, FeatureGate, Profile, ProfileMask, Span, Stage,
    StageMask, TargetConfig,
};
use rstest::rstest;

fn span() -> Span {
    Span::point(1, 0)
}

// ============================================================================
// require_profile
// ============================================================================

#[rstest]
#[case(Profile::Core, ProfileMask::CORE | ProfileMask::COMPATIBILITY, false)]
#[case(Profile::Compatibility, ProfileMask::CORE | ProfileMask::COMPATIBILITY, false)]
#[case(Profile::Es, ProfileMask::CORE | ProfileMask::COMPATIBILITY, true)]
#[case(Profile::None, ProfileMask::CORE, true)]
#[case(Profile::None, !ProfileMask::ES, false)]
#[case(Profile::Core, !ProfileMask::ES, false)]
#[case(Profile::Es, !ProfileMask::ES, true)]
#[case(Profile::Es, ProfileMask::ALL, false)]
fn test_require_profile(
    #[case] active: Profile,
    #[case] allowed: ProfileMask,
    #[case] expect_error: bool,
) {
    let mut gate = gate_for(active, 450, Stage::Vertex);
    gate.require_profile(span(), allowed, "test feature");

    if expect_error {
        assert_eq!(error_codes(&gate), vec![ErrorCode::E0101]);
        assert!(gate.diagnostics()[0].message.contains(active.name()));
    } else {
        assert_clean(&gate);
    }
}

// ============================================================================
// profile_requires
// ============================================================================

#[test]
fn test_profile_requires_noop_outside_mask() {
    // An ES-only rule never fires for a core unit, whatever the version.
    let mut gate = core_gate(110);
    gate.profile_requires(span(), ProfileMask::ES, 300, &[], "texture buffer");
    assert_clean(&gate);
}

#[rstest]
#[case(460, 140, false)]
#[case(140, 140, false)]
#[case(130, 140, true)]
fn test_profile_requires_version(
    #[case] version: u32,
    #[case] min_version: u32,
    #[case] expect_error: bool,
) {
    let mut gate = core_gate(version);
    gate.profile_requires(span(), ProfileMask::CORE, min_version, &[], "uniform blocks");
    if expect_error {
        assert_eq!(error_codes(&gate), vec![ErrorCode::E0102]);
    } else {
        assert_clean(&gate);
    }
}

#[test]
fn test_profile_requires_min_version_zero_means_extension_mandatory() {
    // No version ever incorporated the feature; with no extension listed
    // the check always fails, even on the newest version.
    let mut gate = core_gate(460);
    gate.profile_requires(span(), ProfileMask::CORE, 0, &[], "sparse texture clamp");
    assert_eq!(error_codes(&gate), vec![ErrorCode::E0102]);
}

#[test]
fn test_profile_requires_permitted_by_enabled_extension() {
    // Core at 330 with GL_ARB_gpu_shader5 enabled: below the 400 cutoff
    // but the extension carries it.
    let mut gate = core_gate(330);
    gate.apply_extension_directive(span(), "GL_ARB_gpu_shader5", "enable");
    // The directive warns about partial support, but that is not an error.
    assert_eq!(warning_codes(&gate), vec![ErrorCode::E0305]);

    gate.profile_requires(
        span(),
        ProfileMask::CORE,
        400,
        &[ExtensionId::ArbGpuShader5],
        "gpu_shader5 features",
    );
    assert_eq!(error_codes(&gate), Vec::<ErrorCode>::new());
}

#[test]
fn test_profile_requires_warn_extension_permits_with_warning() {
    let mut gate = es_gate(100);
    gate.apply_extension_directive(span(), "GL_OES_standard_derivatives", "warn");

    gate.profile_requires(
        span(),
        ProfileMask::ES,
        300,
        &[ExtensionId::OesStandardDerivatives],
        "dFdx",
    );
    assert_eq!(error_codes(&gate), Vec::<ErrorCode>::new());
    assert_eq!(warning_codes(&gate), vec![ErrorCode::E0306]);
    assert!(
        gate.diagnostics()[0]
            .message
            .contains("GL_OES_standard_derivatives")
    );
}

// ============================================================================
// require_stage
// ============================================================================

#[rstest]
#[case(Stage::Fragment, StageMask::FRAGMENT, false)]
#[case(Stage::Fragment, StageMask::VERTEX | StageMask::GEOMETRY, true)]
#[case(Stage::TessControl, StageMask::TESS_CONTROL | StageMask::TESS_EVALUATION, false)]
#[case(Stage::Compute, StageMask::ALL, false)]
#[case(Stage::Vertex, StageMask::COMPUTE, true)]
fn test_require_stage(
    #[case] active: Stage,
    #[case] allowed: StageMask,
    #[case] expect_error: bool,
) {
    let mut gate = gate_for(Profile::Core, 450, active);
    gate.require_stage(span(), allowed, "local_size layout");
    if expect_error {
        assert_eq!(error_codes(&gate), vec![ErrorCode::E0201]);
        assert!(gate.diagnostics()[0].message.contains(active.name()));
    } else {
        assert_clean(&gate);
    }
}

// ============================================================================
// check_deprecated / require_not_removed
// ============================================================================

#[test]
fn test_deprecated_warns_by_default() {
    let mut gate = gate_for(Profile::Compatibility, 150, Stage::Vertex);
    gate.check_deprecated(span(), ProfileMask::COMPATIBILITY, 130, "gl_FragColor");
    assert_eq!(warning_codes(&gate), vec![ErrorCode::E0103]);
    assert!(gate.diagnostics()[0].message.contains("130"));
}

#[test]
fn test_deprecated_is_error_when_forward_compatible() {
    let config = CompileConfig::new(Profile::Compatibility, 150, Stage::Vertex)
        .with_forward_compatible(true);
    let mut gate = FeatureGate::new(config);
    gate.check_deprecated(span(), ProfileMask::COMPATIBILITY, 130, "gl_FragColor");
    assert_eq!(error_codes(&gate), vec![ErrorCode::E0103]);
}

#[test]
fn test_deprecated_warning_suppressed() {
    let config = CompileConfig::new(Profile::Compatibility, 150, Stage::Vertex)
        .with_suppressed_warnings(true);
    let mut gate = FeatureGate::new(config);
    gate.check_deprecated(span(), ProfileMask::COMPATIBILITY, 130, "gl_FragColor");
    assert_clean(&gate);
}

#[test]
fn test_deprecated_silent_below_version() {
    let mut gate = gate_for(Profile::Compatibility, 120, Stage::Vertex);
    gate.check_deprecated(span(), ProfileMask::COMPATIBILITY, 130, "gl_FragColor");
    assert_clean(&gate);
}

#[test]
fn test_deprecated_silent_outside_profile_mask() {
    let mut gate = es_gate(300);
    gate.check_deprecated(span(), ProfileMask::COMPATIBILITY, 130, "gl_FragColor");
    assert_clean(&gate);
}

#[test]
fn test_require_not_removed_names_profile_and_version() {
    let mut gate = core_gate(420);
    gate.require_not_removed(span(), ProfileMask::CORE, 420, "gl_ClipVertex");
    assert_eq!(error_codes(&gate), vec![ErrorCode::E0104]);
    let message = &gate.diagnostics()[0].message;
    assert!(message.contains("core"));
    assert!(message.contains("420"));
}

#[test]
fn test_require_not_removed_silent_below_version() {
    let mut gate = core_gate(410);
    gate.require_not_removed(span(), ProfileMask::CORE, 420, "gl_ClipVertex");
    assert_clean(&gate);
}

// ============================================================================
// require_extensions
// ============================================================================

#[test]
fn test_require_extensions_single_missing() {
    let mut gate = es_gate(100);
    gate.require_extensions(
        span(),
        &[ExtensionId::OesStandardDerivatives],
        "derivatives",
    );
    assert_eq!(error_codes(&gate), vec![ErrorCode::E0301]);
    assert!(
        gate.diagnostics()[0]
            .message
            .contains("GL_OES_standard_derivatives")
    );
    assert!(!gate.diagnostics()[0].has_notes());
}

#[test]
fn test_require_extensions_multiple_missing_lists_candidates() {
    let mut gate = es_gate(100);
    gate.require_extensions(
        span(),
        &[
            ExtensionId::ExtGeometryShader,
            ExtensionId::OesGeometryShader,
        ],
        "geometry shading",
    );
    assert_eq!(error_codes(&gate), vec![ErrorCode::E0301]);
    let diagnostic = &gate.diagnostics()[0];
    assert!(diagnostic.message.contains("possible extensions include"));
    assert_eq!(
        diagnostic.notes,
        vec!["GL_EXT_geometry_shader", "GL_OES_geometry_shader"]
    );
}

#[test]
fn test_require_extensions_relaxed_downgrades_to_warnings() {
    let config = CompileConfig::new(Profile::Es, 100, Stage::Fragment).with_relaxed_errors(true);
    let mut gate = FeatureGate::new(config);
    gate.require_extensions(
        span(),
        &[ExtensionId::OesStandardDerivatives],
        "derivatives",
    );
    assert_eq!(error_codes(&gate), Vec::<ErrorCode>::new());
    assert_eq!(
        warning_codes(&gate),
        vec![ErrorCode::E0301, ErrorCode::E0306]
    );
    assert!(gate.diagnostics()[0].message.contains("must be enabled"));
}

#[test]
fn test_require_extensions_satisfied_by_enable() {
    let mut gate = es_gate(310);
    gate.apply_extension_directive(span(), "GL_EXT_geometry_shader", "enable");
    let before = gate.diagnostics().len();
    gate.require_extensions(span(), &[ExtensionId::ExtGeometryShader], "geometry shading");
    assert_eq!(gate.diagnostics().len(), before);
}

#[test]
fn test_extension_turned_on_queries() {
    let mut gate = es_gate(310);
    assert!(!gate.extension_turned_on(ExtensionId::ExtGeometryShader));
    gate.apply_extension_directive(span(), "GL_EXT_geometry_shader", "warn");
    assert!(gate.extension_turned_on(ExtensionId::ExtGeometryShader));
    assert!(gate.extensions_turned_on(&[
        ExtensionId::OesGeometryShader,
        ExtensionId::ExtGeometryShader,
    ]));
    assert!(!gate.extensions_turned_on(&[ExtensionId::OesGeometryShader]));
}

// ============================================================================
// Target checks
// ============================================================================

#[test]
fn test_require_vulkan() {
    let mut gate = core_gate(450);
    gate.require_vulkan(span(), "push_constant layout");
    assert_eq!(error_codes(&gate), vec![ErrorCode::E0401]);

    let config =
        CompileConfig::new(Profile::Core, 450, Stage::Vertex).with_target(TargetConfig::vulkan(100));
    let mut gate = FeatureGate::new(config);
    gate.require_vulkan(span(), "push_constant layout");
    assert_clean(&gate);
}

#[test]
fn test_vulkan_removed() {
    let config =
        CompileConfig::new(Profile::Core, 450, Stage::Vertex).with_target(TargetConfig::vulkan(100));
    let mut gate = FeatureGate::new(config);
    gate.vulkan_removed(span(), "gl_DepthRangeParameters");
    assert_eq!(error_codes(&gate), vec![ErrorCode::E0402]);

    let mut gate = core_gate(450);
    gate.vulkan_removed(span(), "gl_DepthRangeParameters");
    assert_clean(&gate);
}

#[test]
fn test_require_spv() {
    let mut gate = core_gate(450);
    gate.require_spv(span(), "spirv_instruction");
    assert_eq!(error_codes(&gate), vec![ErrorCode::E0403]);

    let config = CompileConfig::new(Profile::Core, 450, Stage::Vertex)
        .with_target(TargetConfig::opengl_spirv(100));
    let mut gate = FeatureGate::new(config);
    gate.require_spv(span(), "spirv_instruction");
    assert_clean(&gate);
}

#[test]
fn test_spv_removed() {
    let config = CompileConfig::new(Profile::Core, 450, Stage::Vertex)
        .with_target(TargetConfig::opengl_spirv(100));
    let mut gate = FeatureGate::new(config);
    gate.spv_removed(span(), "subroutine");
    assert_eq!(error_codes(&gate), vec![ErrorCode::E0404]);

    let mut gate = core_gate(450);
    gate.spv_removed(span(), "subroutine");
    assert_clean(&gate);
}

#[test]
fn test_not_implemented() {
    let mut gate = core_gate(450);
    gate.not_implemented(span(), "subroutine arrays");
    assert_eq!(error_codes(&gate), vec![ErrorCode::E0901]);
}

// ============================================================================
// Composite checks
// ============================================================================

#[test]
fn test_double_check_on_modern_desktop() {
    let mut gate = core_gate(400);
    gate.double_check(span(), "double");
    assert_clean(&gate);
}

#[test]
fn test_double_check_rejects_es() {
    let mut gate = es_gate(310);
    gate.double_check(span(), "double");
    // The profile check fails; the version checks are scoped to desktop
    // profiles and stay silent.
    assert_eq!(error_codes(&gate), vec![ErrorCode::E0101]);
}

#[test]
fn test_full_integer_check() {
    let mut gate = es_gate(300);
    gate.full_integer_check(span(), "bitfieldExtract");
    assert_clean(&gate);

    let mut gate = es_gate(100);
    gate.full_integer_check(span(), "bitfieldExtract");
    assert_eq!(error_codes(&gate), vec![ErrorCode::E0102]);

    let mut gate = gate_for(Profile::None, 120, Stage::Vertex);
    gate.full_integer_check(span(), "bitfieldExtract");
    assert_eq!(error_codes(&gate), vec![ErrorCode::E0102]);
}

#[test]
fn test_int64_check_skips_builtins() {
    let mut gate = core_gate(450);
    gate.int64_check(span(), "int64_t", true);
    assert_clean(&gate);
}

#[test]
fn test_int64_check_requires_extension() {
    let mut gate = core_gate(450);
    gate.int64_check(span(), "int64_t", false);
    assert_eq!(error_codes(&gate), vec![ErrorCode::E0301]);

    let mut gate = core_gate(450);
    gate.apply_extension_directive(span(), "GL_ARB_gpu_shader_int64", "enable");
    gate.int64_check(span(), "int64_t", false);
    assert_eq!(error_codes(&gate), Vec::<ErrorCode>::new());
}

// ============================================================================
// Recovery contract
// ============================================================================

#[test]
fn test_gate_accumulates_and_never_stops() {
    // A pathological unit: every check fails, the gate keeps answering.
    let mut gate = es_gate(100);
    gate.require_profile(span(), !ProfileMask::ES, "a");
    gate.profile_requires(span(), ProfileMask::ES, 300, &[], "b");
    gate.require_stage(span(), StageMask::VERTEX, "c");
    gate.require_not_removed(span(), ProfileMask::ES, 100, "d");
    gate.not_implemented(span(), "e");
    assert_eq!(gate.diagnostics().len(), 5);
    assert!(gate.has_errors());

    let diagnostics = gate.finish();
    assert_eq!(diagnostics.len(), 5);
}
