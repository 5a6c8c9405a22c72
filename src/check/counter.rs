//! Success/failure tallies for checks and groups.

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// Accumulated outcome counts. Both fields only ever grow during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    /// Number of passing predicates.
    pub success: u32,
    /// Number of failing predicates.
    pub failure: u32,
}

impl Counter {
    /// Record one predicate outcome.
    pub fn update(&mut self, pred: bool) {
        if pred {
            self.success += 1;
        } else {
            self.failure += 1;
        }
    }

    /// Add another counter's tallies into this one.
    pub fn merge(&mut self, other: &Self) {
        self.success += other.success;
        self.failure += other.failure;
    }

    /// Total number of recorded outcomes.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.success + self.failure
    }

    /// True only when nothing was recorded at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.success == 0 && self.failure == 0
    }

    /// Whether at least one failure was recorded.
    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.failure != 0
    }

    /// Render as `total` or `total (success/failure)` when something failed.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.failure == 0 {
            self.total().to_string()
        } else {
            format!("{} ({}/{})", self.total(), self.success, self.failure)
        }
    }
}

impl AddAssign<&Self> for Counter {
    fn add_assign(&mut self, rhs: &Self) {
        self.merge(rhs);
    }
}

impl AddAssign for Counter {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
