//! Sink capability: consumers of group, title, params, and result records.
//!
//! A session dispatches to two kinds of sinks:
//! - *outputs* render reports (console, text file, JSONL); group records
//!   reach them only when the matching verbosity flag is set, and a group
//!   begin reaches them before the group is pushed.
//! - *listeners* are user notifications; they receive every group record,
//!   a group begin after the push.
//!
//! Title, params, and result records go to both kinds alike. Sinks observe
//! only: nothing they do feeds back into check outcomes. They must not call
//! back into the session that is dispatching to them.

use std::any::Any;

use crate::check::group::Group;
use crate::check::params::Param;
use crate::check::run_state::Outcome;
use crate::check::title::Title;
use crate::check::verbosity::Verbosity;

/// Per-dispatch view of session state handed to sinks.
#[derive(Clone, Copy)]
pub struct SinkContext<'a> {
    /// Indentation depth for this record.
    pub depth: usize,
    /// Active verbosity; sinks omit param names when `PARAMS_NAME` is off.
    pub verbosity: Verbosity,
    user_data: Option<&'a (dyn Any + Send)>,
}

impl<'a> SinkContext<'a> {
    /// Build a context. `user_data` is the session's opaque user value.
    #[must_use]
    pub fn new(
        depth: usize,
        verbosity: Verbosity,
        user_data: Option<&'a (dyn Any + Send)>,
    ) -> Self {
        Self {
            depth,
            verbosity,
            user_data,
        }
    }

    /// The session's user value, if one is set and it is a `T`.
    #[must_use]
    pub fn user_data<T: Any>(&self) -> Option<&'a T> {
        self.user_data?.downcast_ref::<T>()
    }

    /// Whether param names should be rendered.
    #[must_use]
    pub const fn show_param_names(&self) -> bool {
        self.verbosity.contains(Verbosity::PARAMS_NAME)
    }
}

impl std::fmt::Debug for SinkContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkContext")
            .field("depth", &self.depth)
            .field("verbosity", &self.verbosity)
            .field("user_data", &self.user_data.is_some())
            .finish()
    }
}

/// A report consumer. Every hook defaults to doing nothing.
pub trait Sink: Send {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Session start; `seed` is the random helper's seed.
    fn on_init(&mut self, _ctx: &SinkContext<'_>, _seed: u64) {}

    /// A group opened.
    fn on_group_begin(&mut self, _ctx: &SinkContext<'_>, _name: &str) {}

    /// `group` carries its own tallies, before they merged into the parent.
    fn on_group_end(&mut self, _ctx: &SinkContext<'_>, _group: &Group) {}

    /// A reported check, before its params.
    fn on_title(&mut self, _ctx: &SinkContext<'_>, _title: &Title) {}

    /// Rendered arguments, in argument order.
    fn on_params(&mut self, _ctx: &SinkContext<'_>, _params: &[Param]) {}

    /// Closes a reported check.
    fn on_result(&mut self, _ctx: &SinkContext<'_>, _pred: bool) {}

    /// Session end summary.
    fn on_finish(&mut self, _ctx: &SinkContext<'_>, _outcome: &Outcome) {}

    /// Push buffered output to its destination.
    fn flush(&mut self) {}
}
