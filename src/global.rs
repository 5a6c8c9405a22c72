//! Process-wide session for call sites that cannot thread a [`Session`].
//!
//! One `parking_lot` mutex guards the whole session, so a check and its
//! reports run under a single lock. Sinks run while the lock is held and
//! must not call back into this module.
//!
//! ```
//! use unit_test_helper::global;
//! use unit_test_helper::session::Session;
//!
//! global::install(Session::builder().seed(1).build());
//! global::with(|s| s.check("1 + 1 == 2", 1 + 1 == 2));
//! let outcome = global::finish();
//! assert_eq!(outcome.map(|o| o.exit_code), Some(0));
//! ```

use parking_lot::{Mutex, const_mutex};

use crate::check::run_state::Outcome;
use crate::core::config::Config;
use crate::core::errors::Result;
use crate::session::Session;

static SESSION: Mutex<Option<Session>> = const_mutex(None);

/// Install `session`, returning the one it replaces.
pub fn install(session: Session) -> Option<Session> {
    SESSION.lock().replace(session)
}

/// Load configuration (file and `UTH_*` env) and install a session built
/// from it.
pub fn init(config_path: Option<&std::path::Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    install(Session::from_config(&config));
    Ok(())
}

/// Whether a session is installed.
#[must_use]
pub fn is_installed() -> bool {
    SESSION.lock().is_some()
}

/// Run `f` on the installed session, installing one without sinks first if
/// there is none.
pub fn with<R>(f: impl FnOnce(&mut Session) -> R) -> R {
    let mut guard = SESSION.lock();
    let session = guard.get_or_insert_with(|| Session::builder().build());
    f(session)
}

/// Report the summary, uninstall the session, and return its outcome.
/// `None` when nothing was installed.
pub fn finish() -> Option<Outcome> {
    let mut session = SESSION.lock().take()?;
    Some(session.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    // The only unit test touching the process-wide slot.
    #[test]
    fn install_check_finish_cycle() {
        let _ = install(Session::builder().seed(3).build());
        with(|s| {
            s.begin_group("g");
            s.check("fails", false);
            s.end_group();
        });
        assert!(is_installed());
        let outcome = finish().unwrap();
        assert_eq!(outcome.exit_code, 1);
        assert_eq!(outcome.groups.failure, 1);
        assert!(!is_installed());
        assert!(finish().is_none());
    }
}
