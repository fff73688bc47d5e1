//! Domain entities shared across layers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Order in which the pairs of a mapping are applied to the text.
///
/// Apply is sequential: each pair sees the output of the previous one, so the
/// order matters whenever a replacement contains another pair's search string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplyOrder {
    /// Pairs in the order they were first inserted (flags first, then file)
    #[default]
    Insertion,
    /// Longest search string first; ties keep insertion order
    #[serde(alias = "longest_first")]
    LongestFirst,
}

impl ApplyOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplyOrder::Insertion => "insertion",
            ApplyOrder::LongestFirst => "longest-first",
        }
    }
}

impl fmt::Display for ApplyOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplyOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "insertion" => Ok(ApplyOrder::Insertion),
            "longest-first" | "longest_first" => Ok(ApplyOrder::LongestFirst),
            other => Err(format!(
                "unknown apply order '{other}' (expected 'insertion' or 'longest-first')"
            )),
        }
    }
}

/// Expand `~`, `$VAR` and `${VAR}` in a path-like string.
///
/// Falls back to the unexpanded input if a variable is undefined.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
