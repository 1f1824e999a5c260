//! Trending player query types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which kind of recent roster moves to rank players by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Most added over the lookback window
    #[default]
    Add,
    /// Most dropped over the lookback window
    Drop,
}

impl TrendDirection {
    /// Path segment used by the upstream trending endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Add => "add",
            TrendDirection::Drop => "drop",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
