//! Owned form of every sink notification, for structured logs and capture.

use serde::{Deserialize, Serialize};

use crate::check::group::Group;
use crate::check::params::Param;
use crate::check::run_state::Outcome;
use crate::check::title::Title;

/// One dispatched notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Record {
    /// Session start.
    Init {
        /// Seed of the session's random helper.
        seed: u64,
    },
    /// A group opened.
    GroupBegin {
        /// Group name.
        name: String,
        /// Indentation depth the sink received.
        depth: usize,
    },
    /// A group closed.
    GroupEnd {
        /// The closed group with its own tallies, before merging.
        group: Group,
        /// Depth including the closed group.
        depth: usize,
    },
    /// A reported check.
    Title {
        /// Description, location and predicate.
        title: Title,
        /// Current group depth.
        depth: usize,
    },
    /// Rendered arguments of a reported check.
    Params {
        /// Name/value pairs in argument order.
        params: Vec<Param>,
        /// Current group depth.
        depth: usize,
    },
    /// Outcome of a reported check.
    Result {
        /// Whether the check passed.
        predicate: bool,
    },
    /// Session end.
    Finish {
        /// Final run outcome.
        outcome: Outcome,
    },
}

impl Record {
    /// Whether the record reports something that went wrong.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        match self {
            Self::GroupEnd { group, .. } => group.local_failed,
            Self::Title { title, .. } => !title.predicate,
            Self::Result { predicate } => !*predicate,
            Self::Finish { outcome } => outcome.exit_code != 0,
            Self::Init { .. } | Self::GroupBegin { .. } | Self::Params { .. } => false,
        }
    }

    /// Snake-case event name, as serialized.
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::Init { .. } => "init",
            Self::GroupBegin { .. } => "group_begin",
            Self::GroupEnd { .. } => "group_end",
            Self::Title { .. } => "title",
            Self::Params { .. } => "params",
            Self::Result { .. } => "result",
            Self::Finish { .. } => "finish",
        }
    }
}
