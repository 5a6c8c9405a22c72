//! Shared path and file-name utilities.

use std::env;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Strip every directory component from a source path, accepting both `/`
/// and `\` separators regardless of host platform.
pub fn file_name_from_path(path: &str) -> &str {
    let after_backslash = path.rfind('\\').map_or(path, |idx| &path[idx + 1..]);
    after_backslash
        .rfind('/')
        .map_or(after_backslash, |idx| &after_backslash[idx + 1..])
}

/// Report log name for a session started at `at`:
/// `log_UTH-<month>.<day>.<year>-<hour>h<minute>m<second>s.txt`.
///
/// Fields are not zero padded: 2/27/2021 12:07:43 gives
/// `log_UTH-2.27.2021-12h7m43s.txt`.
pub fn text_log_file_name(at: NaiveDateTime) -> String {
    format!(
        "log_UTH-{}.{}.{}-{}h{}m{}s.txt",
        at.month(),
        at.day(),
        at.year(),
        at.hour(),
        at.minute(),
        at.second()
    )
}

/// Full path of the report log inside `log_dir`.
pub fn text_log_path(log_dir: &Path, at: NaiveDateTime) -> PathBuf {
    log_dir.join(text_log_file_name(at))
}

/// Default configuration file: `$HOME/.config/uth/config.toml`, or
/// `uth.toml` in the working directory when `HOME` is unset.
pub fn default_config_path() -> PathBuf {
    env::var_os("HOME").map_or_else(
        || PathBuf::from("uth.toml"),
        |home| PathBuf::from(home).join(".config").join("uth").join("config.toml"),
    )
}
