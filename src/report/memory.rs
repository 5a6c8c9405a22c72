//! In-memory sink recording every notification, readable while the session
//! still owns the sink.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::check::group::Group;
use crate::check::params::Param;
use crate::check::run_state::Outcome;
use crate::check::title::Title;
use crate::report::record::Record;
use crate::report::sink::{Sink, SinkContext};

/// Records notifications into a shared buffer. Clones share the buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<Record>>>,
}

impl MemorySink {
    /// Empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    /// Recorded event names, in dispatch order.
    #[must_use]
    pub fn events(&self) -> Vec<&'static str> {
        self.records.lock().iter().map(Record::event_name).collect()
    }

    /// Drop everything recorded so far, for every clone.
    pub fn clear(&self) {
        self.records.lock().clear();
    }

    fn push(&self, record: Record) {
        self.records.lock().push(record);
    }
}

impl Sink for MemorySink {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn on_init(&mut self, _ctx: &SinkContext<'_>, seed: u64) {
        self.push(Record::Init { seed });
    }

    fn on_group_begin(&mut self, ctx: &SinkContext<'_>, name: &str) {
        self.push(Record::GroupBegin {
            name: name.to_string(),
            depth: ctx.depth,
        });
    }

    fn on_group_end(&mut self, ctx: &SinkContext<'_>, group: &Group) {
        self.push(Record::GroupEnd {
            group: group.clone(),
            depth: ctx.depth,
        });
    }

    fn on_title(&mut self, ctx: &SinkContext<'_>, title: &Title) {
        self.push(Record::Title {
            title: title.clone(),
            depth: ctx.depth,
        });
    }

    fn on_params(&mut self, ctx: &SinkContext<'_>, params: &[Param]) {
        self.push(Record::Params {
            params: params.to_vec(),
            depth: ctx.depth,
        });
    }

    fn on_result(&mut self, _ctx: &SinkContext<'_>, pred: bool) {
        self.push(Record::Result { predicate: pred });
    }

    fn on_finish(&mut self, _ctx: &SinkContext<'_>, outcome: &Outcome) {
        self.push(Record::Finish { outcome: *outcome });
    }
}
