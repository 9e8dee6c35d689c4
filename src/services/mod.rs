//! Business logic between the HTTP layer and the patient collaborators.

use thiserror::Error;

use crate::repository::errors::FetchError;

pub mod patient_list;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to load patients: {0}")]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    Form(String),

    #[error("type constraint violated: {0}")]
    TypeConstraint(String),

    #[error("patient is not on the current page")]
    NotFound,
}

pub type ServiceResult<T> = Result<T, ServiceError>;
