//! Session-wide identity state: reference-number cache and id counter.

use crate::types::RefNum;
use std::collections::HashMap;

/// Maps `(container id, reference number)` to the canonical ref id owning it.
///
/// Entries live for the whole merge session so later layers resolve to the
/// records created by earlier ones. Tombstoned records keep their entry.
#[derive(Clone, Debug, Default)]
pub struct IdentityCache {
    cells: HashMap<String, HashMap<RefNum, String>>,
}

impl IdentityCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, cell: &str, ref_num: RefNum) -> Option<&str> {
        self.cells
            .get(cell)
            .and_then(|refs| refs.get(&ref_num))
            .map(String::as_str)
    }

    /// Record `ref_id` as the owner of `ref_num` in `cell`, returning any
    /// previous owner.
    pub fn insert(
        &mut self,
        cell: &str,
        ref_num: RefNum,
        ref_id: impl Into<String>,
    ) -> Option<String> {
        self.cells
            .entry(cell.to_string())
            .or_default()
            .insert(ref_num, ref_id.into())
    }

    pub fn remove(&mut self, cell: &str, ref_num: RefNum) -> Option<String> {
        let refs = self.cells.get_mut(cell)?;
        let removed = refs.remove(&ref_num);
        if refs.is_empty() {
            self.cells.remove(cell);
        }
        removed
    }

    /// Total number of entries across all cells.
    pub fn len(&self) -> usize {
        self.cells.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn container_len(&self, cell: &str) -> usize {
        self.cells.get(cell).map_or(0, HashMap::len)
    }
}

/// Default prefix of generated ref ids.
pub const DEFAULT_ID_PREFIX: &str = "ref#";

/// Monotonic source of canonical ref ids. Ids are never handed out twice,
/// even after the record that held one is purged.
#[derive(Clone, Debug)]
pub struct RefIdGenerator {
    prefix: String,
    next: u64,
}

impl Default for RefIdGenerator {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_ID_PREFIX)
    }
}

impl RefIdGenerator {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }

    /// Number of ids issued so far.
    #[inline]
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.next
    }
}
