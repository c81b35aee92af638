use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a layer in the load order.
///
/// The first layer loaded is foundational and defines the pristine baseline.
/// Every later layer is an override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Foundational,
    Override,
}

impl LayerKind {
    /// Kind of the layer at `position` in the load order.
    #[inline]
    #[must_use]
    pub fn at(position: usize) -> Self {
        if position == 0 {
            Self::Foundational
        } else {
            Self::Override
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Foundational => "foundational",
            Self::Override => "override",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
