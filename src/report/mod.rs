//! Report pipeline: the sink capability and the built-in sinks.

pub mod callback;
pub mod console;
pub mod format;
pub mod jsonl;
pub mod memory;
pub mod record;
pub mod sink;
pub mod text_file;
