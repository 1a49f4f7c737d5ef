//! # glslgate
//!
//! Core library for GLSL front-end feature gating: profiles, versions,
//! stages, extensions, and the preprocessor preamble.
//!
//! A parser consults the [`FeatureGate`] at feature-specific checkpoints.
//! The gate decides whether the construct is permitted under the active
//! profile, version, stage, target, and extension behaviors; when it is
//! not, the gate records a diagnostic and returns, and parsing continues
//! as if the feature were allowed. Nothing here ever aborts a compile.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! preamble    → #define block fed to the preprocessor
//!   ↓
//! gate        → decision API consulted at parser checkpoints
//!   ↓
//! extensions  → registry, behavior state, implication table
//!   ↓
//! diagnostics → severity, error codes, collector
//!   ↓
//! config      → profile/version/stage/target per compile unit
//!   ↓
//! base        → primitives (Span, Position)
//! ```
//!
//! ## Example
//!
//! ```
//! use glslgate::{CompileConfig, FeatureGate, Profile, ProfileMask, Span, Stage};
//!
//! let config = CompileConfig::new(Profile::Es, 310, Stage::Fragment);
//! let mut gate = FeatureGate::new(config);
//!
//! // A checkpoint inside the parser's fragment-depth path:
//! gate.require_profile(Span::point(12, 4), ProfileMask::ES, "gl_FragDepth");
//! assert!(!gate.has_errors());
//! ```

// ============================================================================
// MODULES (dependency order: base → config → diagnostics → extensions → gate)
// ============================================================================

/// Foundation types: Span, Position
pub mod base;

/// Per-compile-unit configuration: profile, version, stage, target
pub mod config;

/// Diagnostics: severity, error codes, sinks
pub mod diagnostics;

/// Extension registry, behavior state, implication table
pub mod extensions;

/// The compatibility gate and directive processing
pub mod gate;

/// Preprocessor preamble generation
pub mod preamble;

// Re-export commonly needed items
pub use base::{Position, Span};
pub use config::{CompileConfig, Profile, ProfileMask, Stage, StageMask, TargetConfig};
pub use diagnostics::{Diagnostic, DiagnosticCollector, DiagnosticSink, ErrorCode, Severity};
pub use extensions::{Behavior, BehaviorState, ExtensionId};
pub use gate::FeatureGate;
pub use preamble::build_preamble;
