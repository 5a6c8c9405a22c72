//! The test session: group stack, run state, and the report pipeline.
//!
//! A [`Session`] owns everything a run mutates. Every check goes through
//! [`Session::report`]:
//!
//! 1. the innermost group and the run-wide state record the predicate,
//!    whether or not anything is printed;
//! 2. passing checks stop here unless `SUCCESS` is set;
//! 3. the title goes to every sink;
//! 4. params are rendered and dispatched when the predicate's param flag is
//!    set (`PARAMS_FAILURE` or `PARAMS_SUCCESS`);
//! 5. the result goes to every sink;
//! 6. under [`FailurePolicy::Exit`] a failing check ends the process.
//!
//! ```
//! use unit_test_helper::session::Session;
//!
//! let mut session = Session::builder().build();
//! session.begin_group("suite");
//! session.check_eq("4", &4, "4", &4);
//! session.check_eq("4", &4, "5", &5);
//! let suite = session.end_group();
//! assert!(suite.local_failed);
//! assert_eq!(session.finish().exit_code, 1);
//! ```

use std::any::Any;
use std::io::{self, Write};

use crate::check::counter::Counter;
use crate::check::equals::{ApproxEq, equals, equals_eps};
use crate::check::group::{Group, GroupStack};
use crate::check::params::{self, Param, split_labels};
use crate::check::run_state::{Outcome, RunState};
use crate::check::stringize::Stringize;
use crate::check::title::{Location, Title};
use crate::check::verbosity::Verbosity;
use crate::core::config::Config;
use crate::core::errors::Result;
use crate::logger::jsonl::JsonlConfig;
use crate::random::UthRng;
use crate::report::console::ConsoleSink;
use crate::report::jsonl::JsonlSink;
use crate::report::sink::{Sink, SinkContext};
use crate::report::text_file::TextFileSink;

/// What happens after a failing check has been reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Keep running; the failure shows up in the final outcome.
    #[default]
    Continue,
    /// Finish the session and exit the process with code 1.
    Exit,
}

/// Argument labels of a check, matched positionally to its arguments.
#[derive(Debug, Clone, Copy)]
pub enum Labels<'a> {
    /// Comma-joined text, e.g. `"lhs, rhs"`. Labels cannot contain commas.
    Joined(&'a str),
    /// Already split.
    List(&'a [&'a str]),
}

impl Labels<'_> {
    fn to_vec(self) -> Vec<String> {
        match self {
            Self::Joined(text) => split_labels(text),
            Self::List(list) => list.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl Default for Labels<'_> {
    fn default() -> Self {
        Self::List(&[])
    }
}

impl<'a> From<&'a str> for Labels<'a> {
    fn from(text: &'a str) -> Self {
        Self::Joined(text)
    }
}

impl<'a> From<&'a [&'a str]> for Labels<'a> {
    fn from(list: &'a [&'a str]) -> Self {
        Self::List(list)
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for Labels<'a> {
    fn from(list: &'a [&'a str; N]) -> Self {
        Self::List(list)
    }
}

/// One check ready to be reported.
pub struct Check<'a> {
    title: Title,
    labels: Labels<'a>,
    args: &'a [&'a dyn Stringize],
}

impl<'a> Check<'a> {
    /// A check located at the caller, without arguments.
    #[track_caller]
    pub fn new(description: impl Into<String>, predicate: bool) -> Self {
        Self {
            title: Title::new(description, Location::caller(), predicate),
            labels: Labels::default(),
            args: &[],
        }
    }

    /// Override the source location.
    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.title.location = location;
        self
    }

    /// Attach arguments and their labels.
    #[must_use]
    pub fn args(mut self, labels: impl Into<Labels<'a>>, args: &'a [&'a dyn Stringize]) -> Self {
        self.labels = labels.into();
        self.args = args;
        self
    }

    /// Outcome this check will report.
    #[must_use]
    pub const fn predicate(&self) -> bool {
        self.title.predicate
    }

    /// Description, location and predicate as they will be reported.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }
}

/// Configures and starts a [`Session`].
#[derive(Default)]
pub struct SessionBuilder {
    verbosity: Option<Verbosity>,
    policy: FailurePolicy,
    seed: Option<u64>,
    outputs: Vec<Box<dyn Sink>>,
    listeners: Vec<Box<dyn Sink>>,
    user_data: Option<Box<dyn Any + Send>>,
}

impl SessionBuilder {
    /// Builder with the built-in outputs `config` enables.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut builder = Self::default()
            .verbosity(config.report.verbosity)
            .failure_policy(if config.run.exit_on_failure {
                FailurePolicy::Exit
            } else {
                FailurePolicy::Continue
            });
        builder.seed = config.run.seed;

        let out = &config.output;
        if out.console {
            builder = builder.output(ConsoleSink::stdout(out.color));
        }
        if out.text_file {
            builder = builder.output(TextFileSink::in_dir(&out.log_dir));
        }
        if let Some(path) = &out.jsonl {
            builder = builder.output(JsonlSink::open(JsonlConfig {
                path: path.clone(),
                fallback_path: out.jsonl_fallback.clone(),
                max_size_bytes: out.jsonl_max_size_bytes,
                max_rotated_files: out.jsonl_max_rotated_files,
            }));
        }
        builder
    }

    /// Verbosity mask; the default preset otherwise.
    #[must_use]
    pub const fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = Some(verbosity);
        self
    }

    /// Whether a failing check stops the process.
    #[must_use]
    pub const fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Fixed seed for the random helper; the wall clock otherwise.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Add a report output; group records reach it per the verbosity flags.
    #[must_use]
    pub fn output(mut self, sink: impl Sink + 'static) -> Self {
        self.outputs.push(Box::new(sink));
        self
    }

    /// Add a notification listener; it receives every group record.
    #[must_use]
    pub fn listener(mut self, sink: impl Sink + 'static) -> Self {
        self.listeners.push(Box::new(sink));
        self
    }

    /// Opaque value handed to sinks through [`SinkContext::user_data`].
    #[must_use]
    pub fn user_data(mut self, data: impl Any + Send) -> Self {
        self.user_data = Some(Box::new(data));
        self
    }

    /// Start the session and announce the random seed.
    #[must_use]
    pub fn build(self) -> Session {
        let mut session = Session {
            verbosity: self.verbosity.unwrap_or(Verbosity::DEFAULT),
            policy: self.policy,
            groups: GroupStack::new(),
            state: RunState::default(),
            outputs: self.outputs,
            listeners: self.listeners,
            user_data: self.user_data,
            rng: UthRng::from_seed_or_clock(self.seed),
        };
        let seed = session.rng.seed();
        session.dispatch_all(0, |sink, ctx| sink.on_init(ctx, seed));
        session
    }
}

/// Explicit test session. Single-threaded: share it across threads only
/// behind one lock, as [`crate::global`] does.
pub struct Session {
    verbosity: Verbosity,
    policy: FailurePolicy,
    groups: GroupStack,
    state: RunState,
    outputs: Vec<Box<dyn Sink>>,
    listeners: Vec<Box<dyn Sink>>,
    user_data: Option<Box<dyn Any + Send>>,
    rng: UthRng,
}

impl Session {
    /// Start configuring a session with no sinks.
    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    /// Session with the outputs and policies of `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        SessionBuilder::from_config(config).build()
    }

    // ──────────────────────── checks ────────────────────────

    /// Run one check through the pipeline and return its predicate.
    ///
    /// # Panics
    ///
    /// When labels and arguments differ in count. That is a setup error in
    /// the calling code, not a check failure.
    pub fn report(&mut self, check: Check<'_>) -> bool {
        match self.try_report(check) {
            Ok(pred) => pred,
            Err(e) => panic!("{e}"),
        }
    }

    /// [`Session::report`] returning the label mismatch instead of
    /// panicking. Nothing is recorded when it fails.
    pub fn try_report(&mut self, check: Check<'_>) -> Result<bool> {
        let labels = check.labels.to_vec();
        params::check_label_count(&labels, check.args.len())?;

        let pred = check.title.predicate;
        self.groups.update(pred);
        self.state.update(pred);

        if self.verbosity.reports_check(pred) {
            let depth = self.groups.depth();
            self.dispatch_all(depth, |sink, ctx| sink.on_title(ctx, &check.title));

            if self.verbosity.reports_params(pred) {
                let rendered: Vec<Param> = params::generate(&labels, check.args)?;
                self.dispatch_all(depth, |sink, ctx| sink.on_params(ctx, &rendered));
            }

            self.dispatch_all(depth, |sink, ctx| sink.on_result(ctx, pred));
        }

        if !pred && self.policy == FailurePolicy::Exit {
            let outcome = self.finish();
            std::process::exit(outcome.exit_code);
        }
        Ok(pred)
    }

    /// Plain predicate check.
    #[track_caller]
    pub fn check(&mut self, description: &str, pred: bool) -> bool {
        self.report(Check::new(description, pred))
    }

    /// Predicate check reporting `args` under `labels`.
    #[track_caller]
    pub fn check_with<'a>(
        &mut self,
        description: &str,
        pred: bool,
        labels: impl Into<Labels<'a>>,
        args: &'a [&'a dyn Stringize],
    ) -> bool {
        self.report(Check::new(description, pred).args(labels, args))
    }

    /// `equals(lhs, rhs)` through the values' own equality.
    #[track_caller]
    pub fn check_eq<T>(&mut self, lhs_label: &str, lhs: &T, rhs_label: &str, rhs: &T) -> bool
    where
        T: PartialEq + Stringize,
    {
        let pred = equals(lhs, rhs);
        let labels = [lhs_label, rhs_label];
        let args: [&dyn Stringize; 2] = [lhs, rhs];
        self.report(
            Check::new(format!("equals({lhs_label}, {rhs_label})"), pred).args(&labels, &args),
        )
    }

    /// `equals(lhs, rhs, epsilon)`: strictly less than `epsilon` apart.
    #[track_caller]
    pub fn check_eq_eps<T>(
        &mut self,
        lhs_label: &str,
        lhs: &T,
        rhs_label: &str,
        rhs: &T,
        epsilon: &T::Epsilon,
    ) -> bool
    where
        T: ApproxEq + Stringize,
        T::Epsilon: Stringize + Sized,
    {
        let pred = equals_eps(lhs, rhs, epsilon);
        let labels = [lhs_label, rhs_label, "epsilon"];
        let args: [&dyn Stringize; 3] = [lhs, rhs, epsilon];
        self.report(
            Check::new(format!("equals({lhs_label}, {rhs_label}, epsilon)"), pred)
                .args(&labels, &args),
        )
    }

    // ──────────────────────── groups ────────────────────────

    /// Open a named group.
    ///
    /// Outputs see the begin record at the depth before the push, listeners
    /// at the depth after it.
    pub fn begin_group(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.verbosity.contains(Verbosity::GROUP_START) {
            let depth = self.groups.depth();
            dispatch(
                &mut self.outputs,
                &SinkContext::new(depth, self.verbosity, self.user_data.as_deref()),
                |sink, ctx| sink.on_group_begin(ctx, &name),
            );
        }
        self.groups.begin(name.as_str());
        let depth = self.groups.depth();
        dispatch(
            &mut self.listeners,
            &SinkContext::new(depth, self.verbosity, self.user_data.as_deref()),
            |sink, ctx| sink.on_group_begin(ctx, &name),
        );
    }

    /// Close the innermost group; its tallies merge into the parent.
    ///
    /// The returned group and the end record describe the group itself,
    /// before the merge, at its own depth.
    pub fn try_end_group(&mut self) -> Result<Group> {
        let depth = self.groups.depth();
        let group = self.groups.end()?;
        let ctx = SinkContext::new(depth, self.verbosity, self.user_data.as_deref());
        if self.verbosity.contains(Verbosity::GROUP_EXIT) {
            dispatch(&mut self.outputs, &ctx, |sink, ctx| {
                sink.on_group_end(ctx, &group);
            });
        }
        dispatch(&mut self.listeners, &ctx, |sink, ctx| {
            sink.on_group_end(ctx, &group);
        });
        Ok(group)
    }

    /// # Panics
    ///
    /// When no group is open.
    pub fn end_group(&mut self) -> Group {
        match self.try_end_group() {
            Ok(group) => group,
            Err(e) => panic!("{e}"),
        }
    }

    /// Run `f` inside a group and return its result with the closed group.
    pub fn group<R>(&mut self, name: impl Into<String>, f: impl FnOnce(&mut Self) -> R) -> (R, Group) {
        self.begin_group(name);
        let value = f(self);
        (value, self.end_group())
    }

    // ──────────────────────── state ────────────────────────

    /// Mask consulted by every report.
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Takes effect from the next check.
    pub const fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    /// Current failure policy.
    #[must_use]
    pub const fn failure_policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Switch between continuing and fail-fast.
    pub const fn set_failure_policy(&mut self, policy: FailurePolicy) {
        self.policy = policy;
    }

    /// Number of open groups.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.groups.depth()
    }

    /// Names of the open groups, outermost first.
    #[must_use]
    pub fn group_path(&self) -> Vec<String> {
        self.groups.path().map(str::to_string).collect()
    }

    /// The innermost open group, with its tallies so far.
    #[must_use]
    pub fn current_group(&self) -> Option<&Group> {
        self.groups.top()
    }

    /// Every check of the run so far.
    #[must_use]
    pub const fn counter(&self) -> Counter {
        self.state.counter()
    }

    /// Finished groups, clean versus failed.
    #[must_use]
    pub const fn groups_run(&self) -> Counter {
        self.groups.groups_run()
    }

    /// Whether any check has failed. Never reverts once set.
    #[must_use]
    pub const fn failed(&self) -> bool {
        self.state.failed()
    }

    /// `1` once any check failed, `0` otherwise.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.state.exit_code()
    }

    /// Seed the random helper was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Seeded random helper.
    pub fn rng(&mut self) -> &mut UthRng {
        &mut self.rng
    }

    /// Replace the opaque value sinks can read. The session never inspects it.
    pub fn set_user_data(&mut self, data: impl Any + Send) {
        self.user_data = Some(Box::new(data));
    }

    /// The user value, if one is set and has type `T`.
    #[must_use]
    pub fn user_data<T: Any>(&self) -> Option<&T> {
        self.user_data.as_deref()?.downcast_ref::<T>()
    }

    /// Mutable form of [`Session::user_data`].
    pub fn user_data_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.user_data.as_deref_mut()?.downcast_mut::<T>()
    }

    /// Remove and return the user value.
    pub fn take_user_data(&mut self) -> Option<Box<dyn Any + Send>> {
        self.user_data.take()
    }

    /// Add a sink that receives group lines only when the verbosity asks for them.
    pub fn add_output(&mut self, sink: impl Sink + 'static) {
        self.outputs.push(Box::new(sink));
    }

    /// Add a sink that receives every notification.
    pub fn add_listener(&mut self, sink: impl Sink + 'static) {
        self.listeners.push(Box::new(sink));
    }

    /// Report the exit summary and return the run's outcome.
    ///
    /// Groups still open are left as they are and do not count as run.
    pub fn finish(&mut self) -> Outcome {
        if !self.groups.is_empty() {
            let _ = writeln!(
                io::stderr(),
                "[UTH] finishing with {} open group(s): {}",
                self.groups.depth(),
                self.group_path().join(" > ")
            );
        }
        let outcome = self.outcome();
        self.dispatch_all(0, |sink, ctx| sink.on_finish(ctx, &outcome));
        self.flush();
        outcome
    }

    /// The outcome so far, without reporting anything.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        Outcome {
            exit_code: self.state.exit_code(),
            checks: self.state.counter(),
            groups: self.groups.groups_run(),
        }
    }

    /// Flush every sink.
    pub fn flush(&mut self) {
        for sink in self.outputs.iter_mut().chain(self.listeners.iter_mut()) {
            sink.flush();
        }
    }

    fn dispatch_all(&mut self, depth: usize, mut f: impl FnMut(&mut dyn Sink, &SinkContext<'_>)) {
        let ctx = SinkContext::new(depth, self.verbosity, self.user_data.as_deref());
        dispatch(&mut self.outputs, &ctx, &mut f);
        dispatch(&mut self.listeners, &ctx, &mut f);
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.flush();
    }
}

fn dispatch(
    sinks: &mut [Box<dyn Sink>],
    ctx: &SinkContext<'_>,
    mut f: impl FnMut(&mut dyn Sink, &SinkContext<'_>),
) {
    for sink in sinks {
        f(sink.as_mut(), ctx);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::report::memory::MemorySink;
    use crate::report::record::Record;

    fn recorded(verbosity: Verbosity) -> (Session, MemorySink) {
        let memory = MemorySink::new();
        let session = Session::builder()
            .verbosity(verbosity)
            .seed(5)
            .output(memory.clone())
            .build();
        memory.clear();
        (session, memory)
    }

    #[test]
    fn end_to_end_suite() {
        let (mut session, _) = recorded(Verbosity::DEFAULT);
        session.begin_group("suite");
        assert!(session.check_eq("4", &4, "4", &4));
        assert!(!session.check_eq("4", &4, "5", &5));
        let suite = session.end_group();

        assert_eq!(suite.name, "suite");
        assert!(suite.local_failed);
        assert_eq!(
            suite.counter,
            Counter {
                success: 1,
                failure: 1
            }
        );
        assert_eq!(session.finish().exit_code, 1);
    }

    #[test]
    fn nested_failure_reaches_outer() {
        let (mut session, _) = recorded(Verbosity::NONE);
        session.begin_group("outer");
        session.begin_group("inner");
        session.check("never", false);
        let inner = session.end_group();
        let outer = session.end_group();

        assert!(inner.local_failed);
        assert!(outer.local_failed);
        assert_eq!(outer.counter.failure, 1);
        assert_eq!(
            session.groups_run(),
            Counter {
                success: 0,
                failure: 2
            }
        );
    }

    #[test]
    fn silent_pass_dispatches_nothing_but_counts() {
        let (mut session, memory) = recorded(Verbosity::PARAMS_FAILURE);
        assert!(session.check_with("x == 1", true, "x", &[&1]));
        assert!(memory.records().is_empty());
        assert_eq!(session.counter().success, 1);
    }

    #[test]
    fn failure_dispatches_title_params_result() {
        let (mut session, memory) = recorded(Verbosity::DEFAULT);
        session.check_with("a < b", false, "a, b", &[&3, &2]);
        assert_eq!(memory.events(), vec!["title", "params", "result"]);

        let Record::Params { params, .. } = &memory.records()[1] else {
            panic!("expected params");
        };
        assert_eq!(params[0].name, "a");
        assert_eq!(params[1].value, "2");
    }

    #[test]
    fn default_posture_omits_params_of_passes() {
        let (mut session, memory) = recorded(Verbosity::DEFAULT);
        session.check_with("a == a", true, "a", &[&3]);
        assert_eq!(memory.events(), vec!["title", "result"]);
    }

    #[test]
    fn group_records_gated_for_outputs_not_listeners() {
        let output = MemorySink::new();
        let listener = MemorySink::new();
        let mut session = Session::builder()
            .verbosity(Verbosity::NONE)
            .seed(1)
            .output(output.clone())
            .listener(listener.clone())
            .build();
        output.clear();
        listener.clear();

        session.begin_group("g");
        session.end_group();

        assert!(output.records().is_empty());
        assert_eq!(listener.events(), vec!["group_begin", "group_end"]);
    }

    #[test]
    fn group_begin_depth_differs_between_outputs_and_listeners() {
        let output = MemorySink::new();
        let listener = MemorySink::new();
        let mut session = Session::builder()
            .verbosity(Verbosity::MAX)
            .seed(1)
            .output(output.clone())
            .listener(listener.clone())
            .build();

        session.begin_group("g");
        session.end_group();

        let depths = |sink: &MemorySink| -> Vec<(&'static str, usize)> {
            sink.records()
                .iter()
                .filter_map(|r| match r {
                    Record::GroupBegin { depth, .. } => Some(("begin", *depth)),
                    Record::GroupEnd { depth, .. } => Some(("end", *depth)),
                    _ => None,
                })
                .collect()
        };
        assert_eq!(depths(&output), vec![("begin", 0), ("end", 1)]);
        assert_eq!(depths(&listener), vec![("begin", 1), ("end", 1)]);
    }

    #[test]
    fn checks_inside_group_are_indented() {
        let (mut session, memory) = recorded(Verbosity::MAX);
        session.group("g", |s| s.check("inside", true));
        let title_depth = memory.records().iter().find_map(|r| match r {
            Record::Title { depth, .. } => Some(*depth),
            _ => None,
        });
        assert_eq!(title_depth, Some(1));
    }

    #[test]
    fn try_end_group_on_empty_stack_is_error() {
        let (mut session, _) = recorded(Verbosity::NONE);
        let err = session.try_end_group().unwrap_err();
        assert_eq!(err.code(), "UTH-2001");
    }

    #[test]
    #[should_panic(expected = "UTH-2002")]
    fn label_mismatch_panics() {
        let (mut session, _) = recorded(Verbosity::NONE);
        session.check_with("x", true, "a, b", &[&1]);
    }

    #[test]
    fn label_mismatch_records_nothing() {
        let (mut session, _) = recorded(Verbosity::NONE);
        let check = Check::new("x", false).args("a", &[]);
        assert!(session.try_report(check).is_err());
        assert!(session.counter().is_empty());
        assert!(!session.failed());
    }

    #[test]
    fn init_announces_seed() {
        let memory = MemorySink::new();
        let session = Session::builder().seed(77).output(memory.clone()).build();
        assert_eq!(memory.records(), vec![Record::Init { seed: 77 }]);
        assert_eq!(session.seed(), 77);
    }

    #[test]
    fn user_data_reaches_sinks() {
        use crate::report::callback::CallbackSink;
        use parking_lot::Mutex;
        use std::sync::Arc;

        let seen = Arc::new(Mutex::new(Vec::new()));
        let slot = Arc::clone(&seen);
        let mut session = Session::builder()
            .seed(1)
            .user_data(String::from("ctx"))
            .listener(CallbackSink::new().with_result(move |ctx, _| {
                slot.lock().push(ctx.user_data::<String>().cloned());
            }))
            .build();

        session.check("f", false);
        assert_eq!(*seen.lock(), vec![Some("ctx".to_string())]);
        assert_eq!(session.user_data::<String>().map(String::as_str), Some("ctx"));
    }

    #[test]
    fn epsilon_check_is_strict() {
        let (mut session, _) = recorded(Verbosity::NONE);
        assert!(session.check_eq_eps("a", &1.0_f64, "b", &1.25, &0.5));
        assert!(!session.check_eq_eps("a", &1_i32, "b", &3, &2));
    }

    #[test]
    fn finish_reports_outcome() {
        let (mut session, memory) = recorded(Verbosity::DEFAULT);
        session.check("ok", true);
        let outcome = session.finish();
        assert!(outcome.is_success());
        assert_eq!(memory.events().last(), Some(&"finish"));
    }

    proptest! {
        #[test]
        fn failure_is_sticky(passes in 0_usize..32) {
            let (mut session, _) = recorded(Verbosity::NONE);
            session.check("first", false);
            for _ in 0..passes {
                session.check("later", true);
            }
            prop_assert_eq!(session.exit_code(), 1);
            prop_assert_eq!(session.counter().success as usize, passes);
        }
    }
}
