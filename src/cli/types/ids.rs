//! ID types for Sleeper resources.
//!
//! Sleeper hands out every identifier as a string (numeric-looking or not),
//! so these wrap `String` rather than an integer.

use crate::error::{Result, SleepyError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn non_blank(s: &str) -> Result<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(SleepyError::InvalidId {
            value: s.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Type-safe wrapper for Sleeper user IDs.
///
/// A user ID is what a username resolves to; rosters reference their owner
/// by this value.
///
/// # Examples
///
/// ```rust
/// use sleepy_ffl::UserId;
///
/// let user_id = UserId::new("12345678");
/// assert_eq!(user_id.as_str(), "12345678");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = SleepyError;

    fn from_str(s: &str) -> Result<Self> {
        non_blank(s).map(Self)
    }
}

/// Type-safe wrapper for Sleeper league IDs.
///
/// # Examples
///
/// ```rust
/// use sleepy_ffl::LeagueId;
///
/// let league_id: LeagueId = "784512093457123328".parse().unwrap();
/// assert_eq!(league_id.to_string(), "784512093457123328");
/// assert!("   ".parse::<LeagueId>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueId(pub String);

impl LeagueId {
    /// Create a new LeagueId.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = SleepyError;

    fn from_str(s: &str) -> Result<Self> {
        non_blank(s).map(Self)
    }
}

/// Type-safe wrapper for Draft IDs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftId(pub String);

impl DraftId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DraftId {
    type Err = SleepyError;

    fn from_str(s: &str) -> Result<Self> {
        non_blank(s).map(Self)
    }
}

/// Type-safe wrapper for Player IDs.
///
/// Team defenses use the team abbreviation (`"KC"`) as their ID; empty
/// starter slots come through as `"0"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = SleepyError;

    fn from_str(s: &str) -> Result<Self> {
        non_blank(s).map(Self)
    }
}
