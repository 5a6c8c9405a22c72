//! Configuration system: TOML file + env var overrides + smart defaults.

#![allow(missing_docs)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::check::verbosity::Verbosity;
use crate::core::errors::{Result, UthError};
use crate::core::paths::default_config_path;

/// Full UTH configuration model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub report: ReportConfig,
    pub output: OutputConfig,
    pub run: RunConfig,
    /// File the configuration was read from, if any.
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
}

/// What gets reported.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// Preset name or list of flag names.
    pub verbosity: Verbosity,
}

/// Where reports go.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Built-in colored console sink.
    pub console: bool,
    /// ANSI colors on the console sink.
    pub color: bool,
    /// Plain-text report log under `log_dir`.
    pub text_file: bool,
    pub log_dir: PathBuf,
    /// Structured JSONL event log.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsonl: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsonl_fallback: Option<PathBuf>,
    pub jsonl_max_size_bytes: u64,
    pub jsonl_max_rotated_files: u32,
}

/// Run-wide policies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct RunConfig {
    /// Terminate the process on the first failing check.
    pub exit_on_failure: bool,
    /// Fixed seed for the random helper; wall clock when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::DEFAULT,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            console: true,
            color: true,
            text_file: false,
            log_dir: PathBuf::from("Logs"),
            jsonl: None,
            jsonl_fallback: None,
            jsonl_max_size_bytes: 16 * 1024 * 1024,
            jsonl_max_rotated_files: 3,
        }
    }
}

impl Config {
    /// Default configuration path.
    #[must_use]
    pub fn default_path() -> PathBuf {
        default_config_path()
    }

    /// Load config from default or explicit path, then apply env overrides.
    ///
    /// Missing config file is not an error when loading from default path; defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path_buf = path.map_or_else(Self::default_path, Path::to_path_buf);
        let is_explicit_path = path.is_some();

        let mut cfg = if path_buf.exists() {
            let mut parsed = Self::from_file(&path_buf)?;
            parsed.config_file = Some(path_buf);
            parsed
        } else if is_explicit_path {
            return Err(UthError::MissingConfig { path: path_buf });
        } else {
            Self::default()
        };

        cfg.apply_env_overrides_from(env_var)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a TOML file without env overrides or validation.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| UthError::io(path, source))?;
        Ok(toml::from_str(&raw)?)
    }

    /// Defaults plus env overrides, validated. No file is read.
    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();
        cfg.apply_env_overrides_from(env_var)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply `UTH_*` overrides read through `lookup`.
    pub fn apply_env_overrides_from<F>(&mut self, mut lookup: F) -> Result<()>
    where
        F: FnMut(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("UTH_VERBOSITY") {
            self.report.verbosity = raw.parse().map_err(|_| UthError::InvalidConfig {
                details: format!("env var UTH_VERBOSITY has invalid value {raw:?}"),
            })?;
        }

        if let Some(raw) = lookup("UTH_CONSOLE_LOG") {
            self.output.console = parse_env_bool("UTH_CONSOLE_LOG", &raw)?;
        }

        if let Some(raw) = lookup("UTH_COLOR") {
            self.output.color = parse_env_bool("UTH_COLOR", &raw)?;
        }

        if let Some(raw) = lookup("UTH_FILE_LOG") {
            self.output.text_file = parse_env_bool("UTH_FILE_LOG", &raw)?;
        }

        if let Some(raw) = lookup("UTH_LOG_DIR") {
            self.output.log_dir = PathBuf::from(raw);
        }

        if let Some(raw) = lookup("UTH_JSONL_LOG") {
            self.output.jsonl = if raw.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(raw))
            };
        }

        if let Some(raw) = lookup("UTH_EXIT_ON_FAILURE") {
            self.run.exit_on_failure = parse_env_bool("UTH_EXIT_ON_FAILURE", &raw)?;
        }

        if let Some(raw) = lookup("UTH_SEED") {
            self.run.seed = Some(parse_env_u64("UTH_SEED", &raw)?);
        }

        // NO_COLOR convention: any value disables colors.
        if lookup("NO_COLOR").is_some() {
            self.output.color = false;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.output.text_file && self.output.log_dir.as_os_str().is_empty() {
            return Err(UthError::InvalidConfig {
                details: "output.log_dir must not be empty when output.text_file is enabled"
                    .to_string(),
            });
        }

        if self.output.jsonl.is_some() {
            if self.output.jsonl_max_size_bytes < 1024 {
                return Err(UthError::InvalidConfig {
                    details: format!(
                        "output.jsonl_max_size_bytes must be >= 1024, got {}",
                        self.output.jsonl_max_size_bytes
                    ),
                });
            }
            if self.output.jsonl_max_rotated_files == 0 {
                return Err(UthError::InvalidConfig {
                    details: "output.jsonl_max_rotated_files must be >= 1".to_string(),
                });
            }
        }

        if self.output.jsonl_fallback.is_some() && self.output.jsonl.is_none() {
            return Err(UthError::InvalidConfig {
                details: "output.jsonl_fallback requires output.jsonl".to_string(),
            });
        }

        Ok(())
    }

    /// Whether any built-in sink would produce output.
    #[must_use]
    pub const fn has_builtin_output(&self) -> bool {
        self.output.console || self.output.text_file || self.output.jsonl.is_some()
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok()
}

fn parse_env_u64(name: &str, raw: &str) -> Result<u64> {
    raw.trim().parse::<u64>().map_err(|_| UthError::InvalidConfig {
        details: format!("env var {name} has invalid u64 value {raw:?}"),
    })
}

fn parse_env_bool(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(UthError::InvalidConfig {
            details: format!("env var {name} has invalid bool value {raw:?}"),
        }),
    }
}
