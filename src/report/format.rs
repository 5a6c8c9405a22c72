//! Report line layout shared by the console and text-file sinks.
//!
//! Lines are built as styled segments; the console sink colors them, the
//! text-file sink writes the bare text.

#![allow(missing_docs)]

use crate::check::counter::Counter;
use crate::check::group::Group;
use crate::check::params::{NO_DEBUG_STRING_HINT, Param, indent_multiline};
use crate::check::run_state::Outcome;
use crate::check::title::Title;
use crate::check::verbosity::Verbosity;

/// Prefix of every report line.
pub const TAG: &str = "[UTH] ";

/// Semantic style of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Init,
    Exit,
    Title,
    Success,
    Failure,
    Group,
    Count,
    Warning,
}

/// One output line made of styled segments, without trailing newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub segments: Vec<(Style, String)>,
}

impl Line {
    fn indented(depth: usize) -> Self {
        let mut line = Self::default();
        if depth > 0 {
            line.push(Style::Plain, "\t".repeat(depth));
        }
        line
    }

    fn push(&mut self, style: Style, text: impl Into<String>) -> &mut Self {
        self.segments.push((style, text.into()));
        self
    }

    fn counter(&mut self, counter: &Counter) -> &mut Self {
        self.push(Style::Count, counter.total().to_string());
        if counter.has_failures() {
            self.push(Style::Count, " (")
                .push(Style::Success, counter.success.to_string())
                .push(Style::Count, "/")
                .push(Style::Failure, counter.failure.to_string())
                .push(Style::Count, ")");
        }
        self
    }

    fn exit_code(&mut self, failed: bool) -> &mut Self {
        if failed {
            self.push(Style::Failure, "EXIT_FAILURE (1)")
        } else {
            self.push(Style::Success, "EXIT_SUCCESS (0)")
        }
    }

    /// Text with styles dropped.
    #[must_use]
    pub fn plain(&self) -> String {
        self.segments.iter().map(|(_, text)| text.as_str()).collect()
    }
}

/// `[UTH] Init Rand seed: <seed>`
#[must_use]
pub fn init_line(seed: u64) -> Line {
    let mut line = Line::default();
    line.push(Style::Init, format!("{TAG}Init Rand seed: {seed}"));
    line
}

/// `[UTH] Success|Failure <description> -- <file>:<line>`
#[must_use]
pub fn title_line(depth: usize, title: &Title) -> Line {
    let mut line = Line::indented(depth);
    line.push(Style::Title, TAG);
    if title.predicate {
        line.push(Style::Success, "Success ");
    } else {
        line.push(Style::Failure, "Failure ");
    }
    line.push(
        Style::Title,
        format!("{} -- {}", title.description, title.location),
    );
    line
}

/// Name line (when enabled) then value line for each param.
#[must_use]
pub fn param_lines(depth: usize, verbosity: Verbosity, params: &[Param]) -> Vec<Line> {
    let mut lines = Vec::with_capacity(params.len() * 2);
    for param in params {
        if verbosity.contains(Verbosity::PARAMS_NAME) {
            let mut name = Line::indented(depth);
            name.push(Style::Plain, format!("{}:", param.name));
            lines.push(name);
        }
        let mut value = Line::indented(depth);
        if param.undisplayable {
            value
                .push(Style::Plain, format!("{}\t", param.value))
                .push(Style::Warning, NO_DEBUG_STRING_HINT);
        } else {
            value.push(Style::Plain, indent_multiline(&param.value, depth));
        }
        lines.push(value);
    }
    lines
}

/// `[UTH] Group:\t<name>`
#[must_use]
pub fn group_begin_line(depth: usize, name: &str) -> Line {
    let mut line = Line::indented(depth);
    line.push(Style::Group, format!("{TAG}Group:\t{name}"));
    line
}

/// `[UTH] Group:\t<name> run: <counter> and exit with code: <code>`
#[must_use]
pub fn group_end_line(depth: usize, group: &Group) -> Line {
    let mut line = Line::indented(depth);
    line.push(Style::Group, format!("{TAG}Group:\t{} run: ", group.name))
        .counter(&group.counter)
        .push(Style::Group, " and exit with code: ")
        .exit_code(group.local_failed);
    line
}

/// `[UTH] Run: <checks>[ in <groups> groups] and exit with code: <code>`
///
/// The groups part appears only with `GROUP_COUNT` and at least one
/// finished group.
#[must_use]
pub fn finish_line(verbosity: Verbosity, outcome: &Outcome) -> Line {
    let mut line = Line::default();
    line.push(Style::Exit, format!("{TAG}Run: "))
        .counter(&outcome.checks);
    if verbosity.contains(Verbosity::GROUP_COUNT) && !outcome.groups.is_empty() {
        line.push(Style::Exit, " in ")
            .counter(&outcome.groups)
            .push(Style::Group, " groups");
    }
    line.push(Style::Exit, " and exit with code: ")
        .exit_code(!outcome.is_success());
    line
}
