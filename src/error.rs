//! Error types for the Sleeper fantasy football service

use thiserror::Error;

use crate::engine::EngineError;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, SleepyError>;

#[derive(Error, Debug)]
pub enum SleepyError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid identifier: {value:?}")]
    InvalidId { value: String },

    #[error("Failed to parse season: {0}")]
    InvalidSeason(#[from] std::num::ParseIntError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl SleepyError {
    /// Process exit code used by the CLI when a command fails.
    pub fn exit_code(&self) -> i32 {
        match self {
            SleepyError::Engine(EngineError::NotFound { .. }) => 2,
            SleepyError::Engine(EngineError::Unavailable { .. }) => 3,
            _ => 1,
        }
    }
}
