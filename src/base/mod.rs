//! Foundation types for the gate.
//!
//! This module provides the primitives used throughout the crate:
//! - [`Position`], [`Span`] - Line/column source locations for diagnostics
//!
//! This module has NO dependencies on other glslgate modules.

mod position;

pub use position::{Position, Span};
