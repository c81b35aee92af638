//! Reference streams feeding the merge engine.
//!
//! A [`RefReader`] yields one [`DecodedRef`] per call and `Ok(None)` at the
//! end of the stream. Any `Err` is treated as fatal for the load.

pub mod json_lines;

pub use json_lines::JsonLinesReader;

use crate::error::Result;
use crate::types::{CellRef, GridIndex, RefNum};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Declaration that a reference now lives in another exterior cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovedCellRef {
    pub ref_num: RefNum,
    pub target: GridIndex,
}

/// One record read from a layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecodedRef {
    #[serde(rename = "ref")]
    pub cell_ref: CellRef,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moved: Option<MovedCellRef>,
}

impl DecodedRef {
    pub fn new(cell_ref: CellRef) -> Self {
        Self {
            cell_ref,
            deleted: false,
            moved: None,
        }
    }

    #[must_use]
    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    /// Declare the reference moved to the exterior cell `target`.
    #[must_use]
    pub fn moved_to(mut self, target: GridIndex) -> Self {
        self.moved = Some(MovedCellRef {
            ref_num: self.cell_ref.ref_num,
            target,
        });
        self
    }
}

/// Source of decoded references for one container.
pub trait RefReader {
    fn next_ref(&mut self) -> Result<Option<DecodedRef>>;
}

impl<R: RefReader + ?Sized> RefReader for &mut R {
    fn next_ref(&mut self) -> Result<Option<DecodedRef>> {
        (**self).next_ref()
    }
}

/// Reader over references that are already in memory.
#[derive(Clone, Debug, Default)]
pub struct ListReader {
    refs: VecDeque<DecodedRef>,
}

impl ListReader {
    pub fn new(refs: impl IntoIterator<Item = DecodedRef>) -> Self {
        Self {
            refs: refs.into_iter().collect(),
        }
    }
}

impl RefReader for ListReader {
    fn next_ref(&mut self) -> Result<Option<DecodedRef>> {
        Ok(self.refs.pop_front())
    }
}
