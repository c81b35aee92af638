//! Vec-backed record store with an id index.

use super::RecordStore;
use crate::error::{RefMergeError, Result};
use crate::types::{CellRef, Record, RecordId};
use std::collections::HashMap;

/// Records in insertion order, addressable by index or canonical id.
#[derive(Clone, Debug)]
pub struct RecordCollection<T> {
    records: Vec<Record<T>>,
    by_id: HashMap<String, usize>,
}

/// Store of placed references.
pub type RefCollection = RecordCollection<CellRef>;

impl<T> Default for RecordCollection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            by_id: HashMap::new(),
        }
    }
}

impl<T: RecordId> RecordCollection<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record<T>> {
        self.records.iter()
    }

    /// Record with canonical id `ref_id`.
    pub fn by_id(&self, ref_id: &str) -> Option<&Record<T>> {
        self.index_of(ref_id).map(|index| &self.records[index])
    }

    pub fn records(&self) -> &[Record<T>] {
        &self.records
    }

    fn reindex_from(&mut self, start: usize) {
        for (index, record) in self.records.iter().enumerate().skip(start) {
            self.by_id.insert(record.id().to_string(), index);
        }
    }

    fn out_of_range(&self, index: usize) -> RefMergeError {
        RefMergeError::Store(format!(
            "index {} out of range for {} records",
            index,
            self.records.len()
        ))
    }
}

impl<T: RecordId> RecordStore<T> for RecordCollection<T> {
    fn append(&mut self, record: Record<T>) -> Result<usize> {
        let id = record.id();
        if id.is_empty() {
            return Err(RefMergeError::Store("record has no ref id".into()));
        }
        if self.by_id.contains_key(id) {
            return Err(RefMergeError::Store(format!("duplicate ref id {}", id)));
        }
        let index = self.records.len();
        self.by_id.insert(id.to_string(), index);
        self.records.push(record);
        Ok(index)
    }

    fn get(&self, index: usize) -> Result<&Record<T>> {
        self.records.get(index).ok_or_else(|| self.out_of_range(index))
    }

    fn set(&mut self, index: usize, record: Record<T>) -> Result<()> {
        let current = self.records.get(index).ok_or_else(|| self.out_of_range(index))?;
        if current.id() != record.id() {
            return Err(RefMergeError::Store(format!(
                "cannot replace {} with {} at index {}",
                current.id(),
                record.id(),
                index
            )));
        }
        self.records[index] = record;
        Ok(())
    }

    fn remove_range(&mut self, index: usize, count: usize) -> Result<()> {
        let end = index
            .checked_add(count)
            .filter(|end| *end <= self.records.len())
            .ok_or_else(|| self.out_of_range(index.saturating_add(count)))?;
        for record in self.records.drain(index..end) {
            self.by_id.remove(record.id());
        }
        self.reindex_from(index);
        Ok(())
    }

    fn index_of(&self, ref_id: &str) -> Option<usize> {
        self.by_id.get(ref_id).copied()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
