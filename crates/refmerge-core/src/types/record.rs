//! Base/modified record wrapper and its state tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a record's live content comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordState {
    /// Authored only by the foundational layer.
    BaseOnly,
    /// Added by an override layer, no base version exists.
    ModifiedOnly,
    /// Foundational record changed by an override layer.
    Modified,
    /// Tombstone. Slots keep whatever was last written.
    Deleted,
}

impl RecordState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BaseOnly => "base_only",
            Self::ModifiedOnly => "modified_only",
            Self::Modified => "modified",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for RecordState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Payloads that carry their own canonical id.
pub trait RecordId {
    fn record_id(&self) -> &str;
}

impl RecordId for super::CellRef {
    fn record_id(&self) -> &str {
        &self.ref_id
    }
}

/// A record as seen across layers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<T>,
    pub state: RecordState,
}

impl<T> Record<T> {
    #[must_use]
    pub fn base_only(base: T) -> Self {
        Self {
            base: Some(base),
            modified: None,
            state: RecordState::BaseOnly,
        }
    }

    #[must_use]
    pub fn modified_only(modified: T) -> Self {
        Self {
            base: None,
            modified: Some(modified),
            state: RecordState::ModifiedOnly,
        }
    }

    /// The live variant, `None` for tombstones.
    pub fn get(&self) -> Option<&T> {
        match self.state {
            RecordState::BaseOnly => self.base.as_ref(),
            RecordState::ModifiedOnly | RecordState::Modified => self.modified.as_ref(),
            RecordState::Deleted => None,
        }
    }

    /// Most recently authored variant regardless of state.
    pub fn last_written(&self) -> Option<&T> {
        self.modified.as_ref().or(self.base.as_ref())
    }

    #[inline]
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.state == RecordState::Deleted
    }

    #[inline]
    #[must_use]
    pub fn is_modified(&self) -> bool {
        matches!(
            self.state,
            RecordState::Modified | RecordState::ModifiedOnly
        )
    }
}

impl<T: RecordId> Record<T> {
    /// Canonical id of the record, taken from whichever slot is populated.
    pub fn id(&self) -> &str {
        self.last_written().map(RecordId::record_id).unwrap_or("")
    }
}
