//! Containers (cells) that own placed references.
//!
//! Interior cells have a fixed id. Exterior cells are addressed by a grid
//! index and their id is derived from it as `#x y`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default edge length of one exterior grid cell, in world units.
pub const DEFAULT_CELL_SIZE: f32 = 8192.0;

/// Exterior grid coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridIndex {
    pub x: i32,
    pub y: i32,
}

impl GridIndex {
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Grid cell containing a world position. Only `x` and `y` are used.
    #[must_use]
    pub fn from_position(position: [f32; 3], cell_size: f32) -> Self {
        Self {
            x: (position[0] / cell_size).floor() as i32,
            y: (position[1] / cell_size).floor() as i32,
        }
    }

    #[must_use]
    pub fn cell_id(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GridIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.x, self.y)
    }
}

impl From<[i32; 2]> for GridIndex {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

/// The container a reference stream is being loaded under.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: String,
    /// Grid index for exterior cells, `None` for interiors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exterior: Option<GridIndex>,
}

impl Container {
    pub fn interior(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            exterior: None,
        }
    }

    /// Exterior cell whose id is derived from its grid index.
    pub fn exterior(index: GridIndex) -> Self {
        Self {
            id: index.cell_id(),
            exterior: Some(index),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_exterior(&self) -> bool {
        self.exterior.is_some()
    }
}
