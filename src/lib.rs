#![forbid(unsafe_code)]

//! Unit Test Helper (uth): in-process assertion and reporting engine.
//!
//! Checks run inside the program under test rather than through an
//! external runner:
//! 1. **Checks**: a predicate plus labelled arguments, evaluated by hand,
//!    by generic equality, or by the call-site macros
//! 2. **Groups**: named, nestable scopes whose tallies merge into their
//!    parent when they close
//! 3. **Reports**: verbosity-gated title, params and result records
//!    dispatched to the console, a text file, a JSONL log, and user sinks
//!
//! The run's outcome is sticky: one failing check makes the exit code `1`.
//!
//! # Library usage
//!
//! ```rust,no_run
//! use unit_test_helper::prelude::*;
//!
//! let config = Config::load(None).unwrap();
//! let mut session = Session::from_config(&config);
//! uth_group!(session, "math", {
//!     uth_eq!(session, 2 + 2, 4);
//! });
//! std::process::exit(session.finish().exit_code);
//! ```

pub mod prelude;

pub mod check;
pub mod core;
pub mod global;
pub mod logger;
mod macros;
pub mod random;
pub mod report;
pub mod session;
