//! Composite reference number identifying one placed object across layers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference number of a placed object.
///
/// `content_file` is the index of the layer that first authored the object and
/// `index` is the local number inside that layer. Two references carrying the
/// same `RefNum` in the same container denote the same logical object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RefNum {
    pub content_file: i32,
    pub index: u32,
}

impl RefNum {
    #[inline]
    #[must_use]
    pub const fn new(content_file: i32, index: u32) -> Self {
        Self {
            content_file,
            index,
        }
    }
}

impl fmt::Display for RefNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.content_file, self.index)
    }
}

impl From<(i32, u32)> for RefNum {
    fn from((content_file, index): (i32, u32)) -> Self {
        Self::new(content_file, index)
    }
}
