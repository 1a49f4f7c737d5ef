//! Extension knowledge: the registry, behavior states, and implications.
//!
//! The registry and the implication table are fixed at build time of the
//! tool; only the per-unit [`BehaviorState`] is mutable, and only through
//! `#extension` directives.

mod behavior;
mod implications;
mod registry;

pub use behavior::{Behavior, BehaviorState, ParseBehaviorError};
pub use implications::{IMPLICATIONS, implied_by};
pub use registry::ExtensionId;
