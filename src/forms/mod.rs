//! Form definitions backing the patient routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod patient_list;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid patient id")]
    InvalidPatientId,

    #[error("invalid action")]
    InvalidAction,
}
