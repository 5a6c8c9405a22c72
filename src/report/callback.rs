//! User notification sink assembled from closures.
//!
//! ```
//! use unit_test_helper::report::callback::CallbackSink;
//!
//! let sink = CallbackSink::new()
//!     .with_group_end(|_ctx, group| println!("{} -> {}", group.name, group.exit_code()))
//!     .with_result(|_ctx, pred| println!("result: {pred}"));
//! ```

use crate::check::group::Group;
use crate::check::params::Param;
use crate::check::run_state::Outcome;
use crate::check::title::Title;
use crate::report::sink::{Sink, SinkContext};

type Hook<T> = Box<dyn FnMut(&SinkContext<'_>, &T) + Send>;

/// Dispatches each notification to the closure registered for it, if any.
#[derive(Default)]
pub struct CallbackSink {
    group_begin: Option<Hook<str>>,
    group_end: Option<Hook<Group>>,
    title: Option<Hook<Title>>,
    params: Option<Hook<[Param]>>,
    result: Option<Hook<bool>>,
    finish: Option<Hook<Outcome>>,
}

impl CallbackSink {
    /// Sink with no hooks registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the name of each group as it opens.
    #[must_use]
    pub fn with_group_begin(
        mut self,
        f: impl FnMut(&SinkContext<'_>, &str) + Send + 'static,
    ) -> Self {
        self.group_begin = Some(Box::new(f));
        self
    }

    /// Called with each closed group, its own counter included.
    #[must_use]
    pub fn with_group_end(
        mut self,
        f: impl FnMut(&SinkContext<'_>, &Group) + Send + 'static,
    ) -> Self {
        self.group_end = Some(Box::new(f));
        self
    }

    /// Called for every reported check title.
    #[must_use]
    pub fn with_title(mut self, f: impl FnMut(&SinkContext<'_>, &Title) + Send + 'static) -> Self {
        self.title = Some(Box::new(f));
        self
    }

    /// Called with the rendered arguments of a reported check.
    #[must_use]
    pub fn with_params(
        mut self,
        f: impl FnMut(&SinkContext<'_>, &[Param]) + Send + 'static,
    ) -> Self {
        self.params = Some(Box::new(f));
        self
    }

    /// Called with the predicate of every reported check.
    #[must_use]
    pub fn with_result(mut self, mut f: impl FnMut(&SinkContext<'_>, bool) + Send + 'static) -> Self {
        self.result = Some(Box::new(move |ctx, pred: &bool| f(ctx, *pred)));
        self
    }

    /// Called once when the session finishes.
    #[must_use]
    pub fn with_finish(
        mut self,
        f: impl FnMut(&SinkContext<'_>, &Outcome) + Send + 'static,
    ) -> Self {
        self.finish = Some(Box::new(f));
        self
    }
}

impl Sink for CallbackSink {
    fn name(&self) -> &'static str {
        "callback"
    }

    fn on_group_begin(&mut self, ctx: &SinkContext<'_>, name: &str) {
        if let Some(f) = self.group_begin.as_mut() {
            f(ctx, name);
        }
    }

    fn on_group_end(&mut self, ctx: &SinkContext<'_>, group: &Group) {
        if let Some(f) = self.group_end.as_mut() {
            f(ctx, group);
        }
    }

    fn on_title(&mut self, ctx: &SinkContext<'_>, title: &Title) {
        if let Some(f) = self.title.as_mut() {
            f(ctx, title);
        }
    }

    fn on_params(&mut self, ctx: &SinkContext<'_>, params: &[Param]) {
        if let Some(f) = self.params.as_mut() {
            f(ctx, params);
        }
    }

    fn on_result(&mut self, ctx: &SinkContext<'_>, pred: bool) {
        if let Some(f) = self.result.as_mut() {
            f(ctx, &pred);
        }
    }

    fn on_finish(&mut self, ctx: &SinkContext<'_>, outcome: &Outcome) {
        if let Some(f) = self.finish.as_mut() {
            f(ctx, outcome);
        }
    }
}
