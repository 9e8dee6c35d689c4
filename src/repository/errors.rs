use thiserror::Error;

use crate::domain::action::ActionKind;
use crate::domain::types::PatientId;

/// Failure reported by the patient data source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The backend could not be reached or did not answer in time.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered but rejected the request.
    #[error("server error: {0}")]
    Server(String),
}

/// Failure reported by the patient mutation service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("patient {0} not found")]
    NotFound(PatientId),

    #[error("{kind} conflicts with the current state of patient {target}")]
    Conflict { kind: ActionKind, target: PatientId },

    #[error("action failed: {0}")]
    Failed(String),
}

/// Errors raised while loading a patient store from disk.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed patient data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate patient id {0}")]
    DuplicateId(PatientId),
}

pub type FetchResult<T> = Result<T, FetchError>;
pub type ActionResult<T> = Result<T, ActionError>;
pub type RepositoryResult<T> = Result<T, RepositoryError>;
