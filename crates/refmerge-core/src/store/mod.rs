//! Ordered, index-addressable record storage.
//!
//! The merge engine only needs the narrow contract in [`RecordStore`]; any
//! table or document model that can satisfy it can receive merged
//! references. [`RecordCollection`] is the in-memory implementation.

pub mod collection;

pub use collection::{RecordCollection, RefCollection};

use crate::error::Result;
use crate::types::Record;

/// Storage contract consumed by the merge engine.
pub trait RecordStore<T> {
    /// Append a record and return its index.
    fn append(&mut self, record: Record<T>) -> Result<usize>;

    fn get(&self, index: usize) -> Result<&Record<T>>;

    /// Replace the record at `index`. The record's id must not change.
    fn set(&mut self, index: usize, record: Record<T>) -> Result<()>;

    /// Remove `count` records starting at `index`, shifting later records down.
    fn remove_range(&mut self, index: usize, count: usize) -> Result<()>;

    /// Index of the record with canonical id `ref_id`.
    fn index_of(&self, ref_id: &str) -> Option<usize>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
