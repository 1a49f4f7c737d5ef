//! Extension behavior states and the per-unit behavior table.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use smol_str::SmolStr;
use thiserror::Error;

use super::registry::ExtensionId;

/// Activation state stored for a registered extension.
///
/// `DisablePartial` marks extensions the front end only partially
/// implements; a directive touching one warns before proceeding. It is a
/// registry default only and has no directive token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Behavior {
    Disable,
    DisablePartial,
    Warn,
    Enable,
    Require,
}

impl Behavior {
    /// True when the state permits use of features gated on the extension.
    pub fn permits(self) -> bool {
        matches!(self, Self::Warn | Self::Enable | Self::Require)
    }

    /// Get string representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Disable => "disable",
            Self::DisablePartial => "disable (partial support)",
            Self::Warn => "warn",
            Self::Enable => "enable",
            Self::Require => "require",
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directive behavior token outside require/enable/disable/warn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("behavior not supported: '{0}'")]
pub struct ParseBehaviorError(pub SmolStr);

impl FromStr for Behavior {
    type Err = ParseBehaviorError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "require" => Ok(Self::Require),
            "enable" => Ok(Self::Enable),
            "disable" => Ok(Self::Disable),
            "warn" => Ok(Self::Warn),
            _ => Err(ParseBehaviorError(token.into())),
        }
    }
}

/// Per-compile-unit table of extension behaviors.
///
/// Seeded from registry defaults at unit start, mutated only by directive
/// processing, and discarded with the unit. Iteration order is the registry
/// order, which keeps the `all` directive and test output deterministic.
#[derive(Debug, Clone)]
pub struct BehaviorState {
    table: IndexMap<ExtensionId, Behavior>,
}

impl BehaviorState {
    /// A fresh table holding every registered extension at its default.
    pub fn from_registry_defaults() -> Self {
        Self {
            table: ExtensionId::ALL
                .iter()
                .map(|&ext| (ext, ext.default_behavior()))
                .collect(),
        }
    }

    /// The stored behavior of a registered extension.
    pub fn get(&self, id: ExtensionId) -> Behavior {
        self.table
            .get(&id)
            .copied()
            .unwrap_or_else(|| id.default_behavior())
    }

    /// Textual lookup; `None` means the name is not in the registry.
    pub fn lookup(&self, name: &str) -> Option<Behavior> {
        ExtensionId::from_name(name).map(|id| self.get(id))
    }

    /// Store a behavior for one extension.
    pub fn set(&mut self, id: ExtensionId, behavior: Behavior) {
        self.table.insert(id, behavior);
    }

    /// Store the same behavior for every registered extension.
    pub fn set_all(&mut self, behavior: Behavior) {
        for stored in self.table.values_mut() {
            *stored = behavior;
        }
    }

    /// Iterate over all (extension, behavior) entries in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (ExtensionId, Behavior)> + '_ {
        self.table.iter().map(|(&ext, &behavior)| (ext, behavior))
    }
}

impl Default for BehaviorState {
    fn default() -> Self {
        Self::from_registry_defaults()
    }
}
