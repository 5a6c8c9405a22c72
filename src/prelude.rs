//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use unit_test_helper::prelude::*;
//! ```

// Core
pub use crate::core::config::Config;
pub use crate::core::errors::{Result, UthError};

// Checks
pub use crate::check::counter::Counter;
pub use crate::check::equals::{ApproxEq, equals, equals_eps, equals_seq, equals_seq_eps};
pub use crate::check::group::Group;
pub use crate::check::params::Param;
pub use crate::check::run_state::Outcome;
pub use crate::check::stringize::Stringize;
pub use crate::check::title::{Location, Title};
pub use crate::check::verbosity::Verbosity;

// Reports
pub use crate::report::callback::CallbackSink;
pub use crate::report::sink::{Sink, SinkContext};

// Session
pub use crate::random::UthRng;
pub use crate::session::{Check, FailurePolicy, Labels, Session, SessionBuilder};

// Macros
pub use crate::{
    stringize_display, stringize_repr, uth_check, uth_eq, uth_fn, uth_group, uth_method, uth_op,
    uth_ret_fn, uth_ret_method, uth_ret_op,
};
