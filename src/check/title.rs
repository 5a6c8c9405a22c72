//! Identity of a single check for reporting.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::paths::file_name_from_path;

/// Source position of a check. The file is kept as a bare file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// File name without directories.
    pub file: String,
    /// 1-based line number.
    pub line: u32,
}

impl Location {
    /// Build from a path as produced by `file!()`; directories are stripped.
    pub fn new(file: &str, line: u32) -> Self {
        Self {
            file: file_name_from_path(file).to_string(),
            line,
        }
    }

    /// Location of the caller of a `#[track_caller]` function.
    #[track_caller]
    pub fn caller() -> Self {
        let loc = std::panic::Location::caller();
        Self::new(loc.file(), loc.line())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Description, location, and outcome of one check. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    /// What was checked, e.g. `equals(i, j)`.
    pub description: String,
    /// Where the check is written.
    pub location: Location,
    /// Check outcome.
    pub predicate: bool,
}

impl Title {
    /// Build a title record.
    pub fn new(description: impl Into<String>, location: Location, predicate: bool) -> Self {
        Self {
            description: description.into(),
            location,
            predicate,
        }
    }

    /// `Success` or `Failure`.
    #[must_use]
    pub const fn outcome_label(&self) -> &'static str {
        outcome_label(self.predicate)
    }
}

/// Report word for a predicate.
#[must_use]
pub const fn outcome_label(pred: bool) -> &'static str {
    if pred { "Success" } else { "Failure" }
}
