//! Built-in structured sink: one JSONL line per notification.

use crate::check::group::Group;
use crate::check::params::Param;
use crate::check::run_state::Outcome;
use crate::check::title::Title;
use crate::logger::jsonl::{JsonlConfig, JsonlWriter, LogEntry};
use crate::report::record::Record;
use crate::report::sink::{Sink, SinkContext};

/// Writes every record it receives through a [`JsonlWriter`].
pub struct JsonlSink {
    writer: JsonlWriter,
}

impl JsonlSink {
    /// Never fails: an unwritable path degrades the writer instead.
    #[must_use]
    pub fn open(config: JsonlConfig) -> Self {
        Self {
            writer: JsonlWriter::open(config),
        }
    }

    /// Degradation state of the underlying writer.
    #[must_use]
    pub const fn state(&self) -> &'static str {
        self.writer.state()
    }

    fn emit(&mut self, record: Record) {
        self.writer.write_entry(&LogEntry::new(record));
    }
}

impl Sink for JsonlSink {
    fn name(&self) -> &'static str {
        "jsonl"
    }

    fn on_init(&mut self, _ctx: &SinkContext<'_>, seed: u64) {
        self.emit(Record::Init { seed });
    }

    fn on_group_begin(&mut self, ctx: &SinkContext<'_>, name: &str) {
        self.emit(Record::GroupBegin {
            name: name.to_string(),
            depth: ctx.depth,
        });
    }

    fn on_group_end(&mut self, ctx: &SinkContext<'_>, group: &Group) {
        self.emit(Record::GroupEnd {
            group: group.clone(),
            depth: ctx.depth,
        });
    }

    fn on_title(&mut self, ctx: &SinkContext<'_>, title: &Title) {
        self.emit(Record::Title {
            title: title.clone(),
            depth: ctx.depth,
        });
    }

    fn on_params(&mut self, ctx: &SinkContext<'_>, params: &[Param]) {
        let params = if ctx.show_param_names() {
            params.to_vec()
        } else {
            params
                .iter()
                .map(|p| Param {
                    name: String::new(),
                    ..p.clone()
                })
                .collect()
        };
        self.emit(Record::Params {
            params,
            depth: ctx.depth,
        });
    }

    fn on_result(&mut self, _ctx: &SinkContext<'_>, pred: bool) {
        self.emit(Record::Result { predicate: pred });
    }

    fn on_finish(&mut self, _ctx: &SinkContext<'_>, outcome: &Outcome) {
        self.emit(Record::Finish { outcome: *outcome });
        self.flush();
    }

    fn flush(&mut self) {
        self.writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::check::verbosity::Verbosity;

    #[test]
    fn records_land_as_tagged_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.jsonl");
        let mut sink = JsonlSink::open(JsonlConfig::at(&path));
        assert_eq!(sink.state(), "normal");

        let ctx = SinkContext::new(0, Verbosity::DEFAULT, None);
        sink.on_group_begin(&ctx, "suite");
        sink.on_result(&ctx, true);
        sink.flush();

        let contents = fs::read_to_string(&path).unwrap();
        let events: Vec<String> = contents
            .lines()
            .map(|l| {
                let v: serde_json::Value = serde_json::from_str(l).unwrap();
                v["event"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(events, vec!["group_begin", "result"]);
    }

    #[test]
    fn param_names_dropped_without_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.jsonl");
        let mut sink = JsonlSink::open(JsonlConfig::at(&path));

        let ctx = SinkContext::new(0, Verbosity::PARAMS_FAILURE, None);
        sink.on_params(&ctx, &[Param::new("lhs", "1".to_string())]);
        sink.flush();

        let contents = fs::read_to_string(&path).unwrap();
        let v: serde_json::Value = serde_json::from_str(contents.trim()).unwrap();
        assert_eq!(v["params"][0]["name"], "");
        assert_eq!(v["params"][0]["value"], "1");
    }
}
