//! Built-in text-file sink: the console report without colors, persisted
//! under a per-session timestamped file name.
//!
//! Open or write failures never reach the report pipeline: the sink prints
//! one `[UTH-FILE]` warning to stderr and discards from then on.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::check::group::Group;
use crate::check::params::Param;
use crate::check::run_state::Outcome;
use crate::check::title::Title;
use crate::core::errors::{Result, UthError};
use crate::core::paths::text_log_path;
use crate::report::format::{self, Line};
use crate::report::sink::{Sink, SinkContext};

/// Appends plain report lines to a log file.
pub struct TextFileSink {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl TextFileSink {
    /// Open `<log_dir>/log_UTH-<local timestamp>.txt`, creating `log_dir`.
    #[must_use]
    pub fn in_dir(log_dir: &Path) -> Self {
        let now = chrono::Local::now().naive_local();
        Self::open(text_log_path(log_dir, now))
    }

    /// Open `path` for appending, creating parent directories.
    #[must_use]
    pub fn open(path: PathBuf) -> Self {
        let writer = match open_append(&path) {
            Ok(file) => Some(BufWriter::new(file)),
            Err(e) => {
                let _ = writeln!(io::stderr(), "[UTH-FILE] {e}; text report disabled");
                None
            }
        };
        Self { path, writer }
    }

    /// Destination path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file is open and accepting lines.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.writer.is_some()
    }

    fn write_line(&mut self, line: &Line) {
        let Some(w) = self.writer.as_mut() else {
            return;
        };
        if writeln!(w, "{}", line.plain()).is_err() {
            let _ = writeln!(
                io::stderr(),
                "[UTH-FILE] write to {} failed; text report disabled",
                self.path.display()
            );
            self.writer = None;
        }
    }
}

fn open_append(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| UthError::io(parent, source))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| UthError::io(path, source))
}

impl Sink for TextFileSink {
    fn name(&self) -> &'static str {
        "text_file"
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
        if let Some(w) = self.writer.as_mut() {
            let _ = w.flush();
        }
    }
}

impl Drop for TextFileSink {
    fn drop(&mut self) {
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::title::Location;
    use crate::check::verbosity::Verbosity;

    #[test]
    fn writes_plain_lines_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.txt");
        let mut sink = TextFileSink::open(path.clone());
        assert!(sink.is_active());

        let ctx = SinkContext::new(0, Verbosity::DEFAULT, None);
        sink.on_group_begin(&ctx, "suite");
        sink.on_title(
            &SinkContext::new(1, Verbosity::DEFAULT, None),
            &Title::new("equals(a, b)", Location::new("t.rs", 9), false),
        );
        sink.flush();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "[UTH] Group:\tsuite\n\t[UTH] Failure equals(a, b) -- t.rs:9\n"
        );
        assert!(!contents.contains('\u{1b}'), "no ANSI escapes expected");
    }

    #[test]
    fn in_dir_uses_timestamped_name() {
        let dir = tempfile::tempdir().unwrap();
        let sink = TextFileSink::in_dir(dir.path());
        let name = sink.path().file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("log_UTH-"), "{name}");
        assert!(name.ends_with("s.txt"), "{name}");
        assert!(sink.path().exists());
    }

    #[test]
    fn unopenable_path_degrades_silently() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        // A regular file cannot act as a parent directory.
        let mut sink = TextFileSink::open(blocker.join("report.txt"));
        assert!(!sink.is_active());
        sink.on_result(&SinkContext::new(0, Verbosity::DEFAULT, None), false);
        sink.on_title(
            &SinkContext::new(0, Verbosity::DEFAULT, None),
            &Title::new("x", Location::new("t.rs", 1), true),
        );
    }
}
