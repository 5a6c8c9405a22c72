//! UTH-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, UthError>;

/// Top-level error type for the unit test helper.
#[derive(Debug, Error)]
pub enum UthError {
    #[error("[UTH-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[UTH-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[UTH-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[UTH-2001] group end requested with no live group")]
    EmptyGroupStack,

    #[error("[UTH-2002] {labels} argument label(s) supplied for {args} argument(s)")]
    LabelMismatch { labels: usize, args: usize },

    #[error("[UTH-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[UTH-3002] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl UthError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "UTH-1001",
            Self::MissingConfig { .. } => "UTH-1002",
            Self::ConfigParse { .. } => "UTH-1003",
            Self::EmptyGroupStack => "UTH-2001",
            Self::LabelMismatch { .. } => "UTH-2002",
            Self::Serialization { .. } => "UTH-2101",
            Self::Io { .. } => "UTH-3002",
        }
    }

    /// Whether the error signals a mistake in test setup rather than an
    /// environmental failure. These are never recovered from.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(self, Self::EmptyGroupStack | Self::LabelMismatch { .. })
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<serde_json::Error> for UthError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for UthError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}
