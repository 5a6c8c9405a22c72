//! Run-wide outcome: global tally and the sticky failure flag.

use std::process::ExitCode;

use serde::{Deserialize, Serialize};

use crate::check::counter::Counter;

/// Updated by every check regardless of group nesting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    failed: bool,
    counter: Counter,
}

impl RunState {
    /// Record a predicate. Once failed, the run stays failed.
    pub fn update(&mut self, pred: bool) {
        self.counter.update(pred);
        self.failed |= !pred;
    }

    /// Sticky: true from the first failing check on.
    #[must_use]
    pub const fn failed(&self) -> bool {
        self.failed
    }

    /// Every check of the run, regardless of grouping.
    #[must_use]
    pub const fn counter(&self) -> Counter {
        self.counter
    }

    /// `0` if no check ever failed, `1` otherwise.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.failed { 1 } else { 0 }
    }
}

/// Final result of a session, read once at program end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Process exit code: `0` success, `1` failure.
    pub exit_code: i32,
    /// Every check of the run.
    pub checks: Counter,
    /// Finished groups, clean versus failed.
    pub groups: Counter,
}

impl Outcome {
    /// Whether no check failed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        if outcome.is_success() {
            Self::SUCCESS
        } else {
            Self::FAILURE
        }
    }
}
