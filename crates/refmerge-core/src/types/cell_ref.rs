//! Placed-object references.

use super::container::GridIndex;
use super::ref_num::RefNum;
use serde::{Deserialize, Serialize};

/// One placed object inside a cell.
///
/// `ref_id` and `cell` are assigned by the merge engine; decoders leave them
/// empty. `original_cell` is empty unless the reference was moved here from
/// another cell by an override layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CellRef {
    pub ref_num: RefNum,
    #[serde(default)]
    pub ref_id: String,
    /// Id of the placed object type.
    pub id: String,
    #[serde(default)]
    pub cell: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub original_cell: String,
    #[serde(default)]
    pub position: [f32; 3],
    #[serde(default)]
    pub rotation: [f32; 3],
    #[serde(default = "default_scale")]
    pub scale: f32,
}

fn default_scale() -> f32 {
    1.0
}

impl CellRef {
    pub fn new(ref_num: impl Into<RefNum>, id: impl Into<String>, position: [f32; 3]) -> Self {
        Self {
            ref_num: ref_num.into(),
            id: id.into(),
            position,
            scale: default_scale(),
            ..Default::default()
        }
    }

    /// Exterior grid cell the reference's position falls into.
    #[inline]
    #[must_use]
    pub fn grid_index(&self, cell_size: f32) -> GridIndex {
        GridIndex::from_position(self.position, cell_size)
    }

    /// Whether the reference was relocated from another cell.
    #[inline]
    #[must_use]
    pub fn is_moved(&self) -> bool {
        !self.original_cell.is_empty()
    }

    /// Name used in diagnostics: the canonical id when known, else the object id.
    pub fn display_name(&self) -> &str {
        if self.ref_id.is_empty() {
            &self.id
        } else {
            &self.ref_id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::container::DEFAULT_CELL_SIZE;

    #[test]
    fn test_grid_index_from_position() {
        let r = CellRef::new((0, 5), "chest_small_01", [9000.0, 17000.0, 120.0]);
        assert_eq!(r.grid_index(DEFAULT_CELL_SIZE), GridIndex::new(1, 2));
    }

    #[test]
    fn test_new_ref_is_not_moved() {
        let r = CellRef::new((0, 1), "barrel_01", [0.0; 3]);
        assert!(!r.is_moved());
        assert_eq!(r.scale, 1.0);
    }

    #[test]
    fn test_display_name_prefers_ref_id() {
        let mut r = CellRef::new((0, 1), "barrel_01", [0.0; 3]);
        assert_eq!(r.display_name(), "barrel_01");
        r.ref_id = "ref#3".into();
        assert_eq!(r.display_name(), "ref#3");
    }

    #[test]
    fn test_deserialize_defaults() {
        let r: CellRef =
            serde_json::from_str(r#"{"ref_num":{"content_file":0,"index":5},"id":"crate_01"}"#)
                .unwrap();
        assert_eq!(r.scale, 1.0);
        assert!(r.ref_id.is_empty());
        assert!(r.cell.is_empty());
    }
}
