use serde::Serialize;
use std::fmt;

/// What the engine did with one decoded reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// New record created.
    Appended,
    /// Existing record overwritten.
    Merged,
    /// Base-only record removed along with its identity.
    Purged,
    /// Record kept as a tombstone.
    Tombstoned,
    /// Nothing changed; a diagnostic was emitted.
    Skipped,
}

/// Per-load tally of outcomes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub appended: usize,
    pub merged: usize,
    pub purged: usize,
    pub tombstoned: usize,
    pub skipped: usize,
}

impl LoadReport {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Appended => self.appended += 1,
            Outcome::Merged => self.merged += 1,
            Outcome::Purged => self.purged += 1,
            Outcome::Tombstoned => self.tombstoned += 1,
            Outcome::Skipped => self.skipped += 1,
        }
    }

    /// Fold another report into this one.
    pub fn absorb(&mut self, other: LoadReport) {
        self.appended += other.appended;
        self.merged += other.merged;
        self.purged += other.purged;
        self.tombstoned += other.tombstoned;
        self.skipped += other.skipped;
    }

    /// Number of references consumed.
    pub fn total(&self) -> usize {
        self.appended + self.merged + self.purged + self.tombstoned + self.skipped
    }
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} appended, {} merged, {} purged, {} tombstoned, {} skipped",
            self.appended, self.merged, self.purged, self.tombstoned, self.skipped
        )
    }
}
