//! Outcomes that abort a composite view.

use serde::Serialize;
use thiserror::Error;

pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Why a composite view could not be assembled.
///
/// Players missing from the directory are not represented here; they are
/// dropped from enriched lists and never escalate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A required entity was absent from data the upstream did return.
    #[error("{message}")]
    NotFound { message: String },

    /// The upstream could not be reached or answered unusably on a required fetch.
    #[error("{message}")]
    Unavailable { message: String },
}

/// Wire shape for every failed lookup: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl EngineError {
    pub fn not_found(message: impl Into<String>) -> Self {
        EngineError::NotFound {
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        EngineError::Unavailable {
            message: message.into(),
        }
    }

    /// HTTP status the error maps to when served.
    pub fn status_code(&self) -> u16 {
        match self {
            EngineError::NotFound { .. } => 404,
            EngineError::Unavailable { .. } => 503,
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
        }
    }
}
