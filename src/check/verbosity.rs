//! Reporting toggles consulted by the report pipeline.
//!
//! A plain bitset: flags are independent and freely combinable.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::errors::UthError;

/// Set of independent reporting flags.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verbosity(u8);

impl Verbosity {
    /// Report nothing for passing checks and no params.
    pub const NONE: Self = Self(0);
    /// Report passing checks (title and result).
    pub const SUCCESS: Self = Self(1 << 0);
    /// Render param names next to their values.
    pub const PARAMS_NAME: Self = Self(1 << 1);
    /// Render params of failing checks.
    pub const PARAMS_FAILURE: Self = Self(1 << 2);
    /// Render params of passing checks.
    pub const PARAMS_SUCCESS: Self = Self(1 << 3);
    /// Report group begin.
    pub const GROUP_START: Self = Self(1 << 4);
    /// Report group end with its outcome.
    pub const GROUP_EXIT: Self = Self(1 << 5);
    /// Report the groups tally in the exit summary.
    pub const GROUP_COUNT: Self = Self(1 << 6);

    /// Failures with params, group ends only.
    pub const LIGHT: Self = Self(Self::PARAMS_NAME.0 | Self::PARAMS_FAILURE.0 | Self::GROUP_EXIT.0);
    /// Loud on failure, terse on success.
    pub const DEFAULT: Self = Self(
        Self::SUCCESS.0
            | Self::PARAMS_NAME.0
            | Self::PARAMS_FAILURE.0
            | Self::GROUP_START.0
            | Self::GROUP_EXIT.0
            | Self::GROUP_COUNT.0,
    );
    /// Every flag set.
    pub const MAX: Self = Self(0x7F);

    const NAMED: [(&'static str, Self); 7] = [
        ("success", Self::SUCCESS),
        ("params_name", Self::PARAMS_NAME),
        ("params_failure", Self::PARAMS_FAILURE),
        ("params_success", Self::PARAMS_SUCCESS),
        ("group_start", Self::GROUP_START),
        ("group_exit", Self::GROUP_EXIT),
        ("group_count", Self::GROUP_COUNT),
    ];

    /// Raw bit representation.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Build from raw bits, dropping unknown ones.
    #[must_use]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::MAX.0)
    }

    /// Whether every flag of `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Copy with `other` set or cleared.
    #[must_use]
    pub const fn with(self, other: Self, enabled: bool) -> Self {
        if enabled {
            Self(self.0 | other.0)
        } else {
            Self(self.0 & !other.0)
        }
    }

    /// Whether a check with this outcome gets a title/result report.
    #[must_use]
    pub const fn reports_check(self, pred: bool) -> bool {
        !pred || self.contains(Self::SUCCESS)
    }

    /// Whether a check with this outcome gets its params rendered.
    #[must_use]
    pub const fn reports_params(self, pred: bool) -> bool {
        if pred {
            self.contains(Self::PARAMS_SUCCESS)
        } else {
            self.contains(Self::PARAMS_FAILURE)
        }
    }

    /// Names of the flags that are set, in bit order.
    #[must_use]
    pub fn flag_names(self) -> Vec<&'static str> {
        Self::NAMED
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect()
    }

    /// Parse one preset (`none`, `light`, `default`, `max`) or flag name.
    pub fn parse_name(name: &str) -> Result<Self, UthError> {
        let key = name.trim().to_ascii_lowercase().replace('-', "_");
        match key.as_str() {
            "none" => Ok(Self::NONE),
            "light" => Ok(Self::LIGHT),
            "default" => Ok(Self::DEFAULT),
            "max" | "all" => Ok(Self::MAX),
            _ => Self::NAMED
                .iter()
                .find(|(n, _)| *n == key)
                .map(|(_, flag)| *flag)
                .ok_or_else(|| UthError::InvalidConfig {
                    details: format!("unknown verbosity flag {name:?}"),
                }),
        }
    }
}

impl Default for Verbosity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl BitOr for Verbosity {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Verbosity {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Verbosity {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for Verbosity {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0 & Self::MAX.0)
    }
}

impl fmt::Debug for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Verbosity({})", self.flag_names().join(" | "))
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("none");
        }
        f.write_str(&self.flag_names().join(","))
    }
}

/// Comma or `|` separated list of presets and flag names, unioned.
impl FromStr for Verbosity {
    type Err = UthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut out = Self::NONE;
        let mut seen = false;
        for part in s.split([',', '|']).filter(|p| !p.trim().is_empty()) {
            out |= Self::parse_name(part)?;
            seen = true;
        }
        if seen {
            Ok(out)
        } else {
            Err(UthError::InvalidConfig {
                details: "verbosity must name at least one preset or flag".to_string(),
            })
        }
    }
}

impl Serialize for Verbosity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Verbosity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            List(Vec<String>),
        }

        let joined = match Repr::deserialize(deserializer)? {
            Repr::Text(text) => text,
            Repr::List(items) => {
                if items.is_empty() {
                    return Ok(Self::NONE);
                }
                items.join(",")
            }
        };
        joined.parse().map_err(serde::de::Error::custom)
    }
}
