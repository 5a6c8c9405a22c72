//! Nested named scopes aggregating the outcomes of the checks run inside them.
//!
//! The stack owns every live [`Group`]. Checks update the top group only;
//! a popped group merges its tallies and failure flag into the new top, so
//! outer groups see everything their nested groups saw.

use serde::{Deserialize, Serialize};

use crate::check::counter::Counter;
use crate::core::errors::{Result, UthError};

/// One named scope of checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Name given at begin.
    pub name: String,
    /// Set once any check in this group (or a nested one) fails.
    pub local_failed: bool,
    /// Outcomes recorded in this group and its nested groups.
    pub counter: Counter,
}

impl Group {
    /// Fresh group with no outcomes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            local_failed: false,
            counter: Counter::default(),
        }
    }

    /// Record one predicate outcome.
    pub fn update(&mut self, pred: bool) {
        self.counter.update(pred);
        if !pred {
            self.local_failed = true;
        }
    }

    /// Merge tallies and failure flag into `parent`. The flag is OR-ed and
    /// never cleared.
    pub fn spread_into(&self, parent: &mut Self) {
        parent.local_failed |= self.local_failed;
        parent.counter.merge(&self.counter);
    }

    /// `0` when every check passed, `1` otherwise.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.local_failed { 1 } else { 0 }
    }
}

/// LIFO stack of live groups plus the lifetime tally of finished groups.
#[derive(Debug, Default)]
pub struct GroupStack {
    groups: Vec<Group>,
    groups_run: Counter,
}

impl GroupStack {
    /// Empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live groups; also the indentation depth of report lines.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.groups.len()
    }

    /// No group is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Innermost live group.
    #[must_use]
    pub fn top(&self) -> Option<&Group> {
        self.groups.last()
    }

    /// Names of live groups, outermost first.
    pub fn path(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }

    /// Finished groups: success for groups that exited clean, failure otherwise.
    #[must_use]
    pub const fn groups_run(&self) -> Counter {
        self.groups_run
    }

    /// Push a new empty group.
    pub fn begin(&mut self, name: impl Into<String>) {
        self.groups.push(Group::new(name));
    }

    /// Record a predicate in the innermost group. No-op on an empty stack.
    pub fn update(&mut self, pred: bool) {
        if let Some(top) = self.groups.last_mut() {
            top.update(pred);
        }
    }

    /// Pop the innermost group, merge it into its parent, and return it as
    /// it was before the merge.
    pub fn end(&mut self) -> Result<Group> {
        let group = self.groups.pop().ok_or(UthError::EmptyGroupStack)?;
        if let Some(parent) = self.groups.last_mut() {
            group.spread_into(parent);
        }
        self.groups_run.update(!group.local_failed);
        Ok(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_returns_own_tallies() {
        let mut stack = GroupStack::new();
        stack.begin("A");
        stack.update(true);
        stack.update(false);
        let a = stack.end().unwrap();
        assert_eq!(a.name, "A");
        assert!(a.local_failed);
        assert_eq!(
            a.counter,
            Counter {
                success: 1,
                failure: 1
            }
        );
        assert!(stack.is_empty());
    }

    #[test]
    fn nested_failure_propagates_to_outer() {
        let mut stack = GroupStack::new();
        stack.begin("outer");
        stack.begin("inner");
        stack.update(false);
        let inner = stack.end().unwrap();
        assert!(inner.local_failed);
        let outer = stack.end().unwrap();
        assert!(outer.local_failed);
        assert_eq!(outer.counter.failure, 1);
        assert_eq!(outer.counter.total(), 1);
    }

    #[test]
    fn parent_flag_is_never_cleared_by_clean_child() {
        let mut stack = GroupStack::new();
        stack.begin("outer");
        stack.update(false);
        stack.begin("inner");
        stack.update(true);
        let inner = stack.end().unwrap();
        assert!(!inner.local_failed);
        let outer = stack.end().unwrap();
        assert!(outer.local_failed);
        assert_eq!(outer.counter.total(), 2);
    }

    #[test]
    fn depth_tracks_push_and_pop() {
        let mut stack = GroupStack::new();
        assert_eq!(stack.depth(), 0);
        stack.begin("a");
        stack.begin("b");
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.path().collect::<Vec<_>>(), vec!["a", "b"]);
        stack.end().unwrap();
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top().map(|g| g.name.as_str()), Some("a"));
    }

    #[test]
    fn update_on_empty_stack_is_noop() {
        let mut stack = GroupStack::new();
        stack.update(false);
        assert!(stack.is_empty());
    }

    #[test]
    fn end_on_empty_stack_is_contract_violation() {
        let mut stack = GroupStack::new();
        let err = stack.end().unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[test]
    fn groups_run_counts_by_own_flag() {
        let mut stack = GroupStack::new();
        stack.begin("clean");
        stack.update(true);
        stack.end().unwrap();
        stack.begin("dirty");
        stack.update(false);
        stack.end().unwrap();
        assert_eq!(
            stack.groups_run(),
            Counter {
                success: 1,
                failure: 1
            }
        );
    }
}
