//! Error Types
//!
//! One enum per pipeline stage. Messages are user-facing: the admin panel
//! shows them verbatim in notifications and alerts.

use thiserror::Error;

/// Failure talking to the config API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("invalid {resource} payload: {source}")]
    Decode {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// The admin bootstrap is all-or-nothing: the first failing resource aborts it.
#[derive(Debug, Error)]
#[error("failed to load {resource}: {source}")]
pub struct LoadError {
    pub resource: &'static str,
    #[source]
    pub source: ApiError,
}

/// Rejected list or field edit. The store is untouched when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("Maximum {cap} {kind} allowed")]
    CapReached { kind: &'static str, cap: usize },
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },
    #[error("removal not confirmed")]
    NotConfirmed,
    #[error("{0} cannot be toggled")]
    NotToggleable(&'static str),
    #[error("unknown field path '{path}' for {kind}")]
    InvalidPath { kind: &'static str, path: String },
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
    #[error("{0} is not loaded")]
    NotLoaded(&'static str),
    #[error("no free id left for {0}")]
    IdExhausted(&'static str),
}

/// Outcome of a failed save
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("nothing to save")]
    NothingToSave,
    #[error("{}", .0.join(", "))]
    Failed(Vec<String>),
}

/// Attachment upload failure
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type EditResult<T> = Result<T, EditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_save_joins_errors() {
        let err = SaveError::Failed(vec!["HTTP 500".into(), "disk full".into()]);
        assert_eq!(err.to_string(), "HTTP 500, disk full");
    }

    #[test]
    fn test_cap_message() {
        let err = EditError::CapReached { kind: "benefits", cap: 6 };
        assert_eq!(err.to_string(), "Maximum 6 benefits allowed");
    }
}
