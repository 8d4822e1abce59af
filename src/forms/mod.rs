//! Request payloads and query parameters accepted by the API.

use thiserror::Error;
use validator::ValidationErrors;

pub mod doctor;
pub mod specialty;

#[derive(Debug, Error)]
/// Errors that can occur when processing request payloads.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid name")]
    InvalidName,

    #[error("invalid specialty id")]
    InvalidSpecialtyId,
}
