//! Built-in console sink: colored, indented report lines.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};

use crate::check::group::Group;
use crate::check::params::Param;
use crate::check::run_state::Outcome;
use crate::check::title::Title;
use crate::report::format::{self, Line, Style};
use crate::report::sink::{Sink, SinkContext};

/// Writes report lines to stdout (or any writer), colored by record kind.
pub struct ConsoleSink {
    out: Box<dyn Write + Send>,
    color: bool,
    broken: bool,
}

impl ConsoleSink {
    /// Console sink on stdout.
    #[must_use]
    pub fn stdout(color: bool) -> Self {
        Self::with_writer(Box::new(io::stdout()), color)
    }

    /// Console sink on an arbitrary writer.
    #[must_use]
    pub fn with_writer(out: Box<dyn Write + Send>, color: bool) -> Self {
        Self {
            out,
            color,
            broken: false,
        }
    }

    fn paint(style: Style, text: &str) -> ColoredString {
        match style {
            Style::Plain => text.normal(),
            Style::Init | Style::Exit => text.magenta(),
            Style::Title => text.yellow(),
            Style::Success => text.green(),
            Style::Failure => text.red(),
            Style::Group => text.blue().bold(),
            Style::Count | Style::Warning => text.yellow().bold(),
        }
    }

    fn write_line(&mut self, line: &Line) {
        if self.broken {
            return;
        }
        let rendered = if self.color {
            line.segments
                .iter()
                .map(|(style, text)| Self::paint(*style, text).to_string())
                .collect::<String>()
        } else {
            line.plain()
        };
        if writeln!(self.out, "{rendered}").is_err() {
            // A closed stdout must not take the run down with it.
            self.broken = true;
            let _ = writeln!(io::stderr(), "[UTH] console output failed, disabling console sink");
        }
    }
}

impl Sink for ConsoleSink {
    fn name(&self) -> &'static str {
        "console"
    }

    fn on_init(&mut self, _ctx: &SinkContext<'_>, seed: u64) {
        self.write_line(&format::init_line(seed));
    }

    fn on_group_begin(&mut self, ctx: &SinkContext<'_>, name: &str) {
        self.write_line(&format::group_begin_line(ctx.depth, name));
    }

    fn on_group_end(&mut self, ctx: &SinkContext<'_>, group: &Group) {
        self.write_line(&format::group_end_line(ctx.depth, group));
    }

    fn on_title(&mut self, ctx: &SinkContext<'_>, title: &Title) {
        self.write_line(&format::title_line(ctx.depth, title));
    }

    fn on_params(&mut self, ctx: &SinkContext<'_>, params: &[Param]) {
        for line in format::param_lines(ctx.depth, ctx.verbosity, params) {
            self.write_line(&line);
        }
    }

    fn on_finish(&mut self, ctx: &SinkContext<'_>, outcome: &Outcome) {
        self.write_line(&format::finish_line(ctx.verbosity, outcome));
        self.flush();
    }

    fn flush(&mut self) {
        let _ = self.out.flush();
    }
}
