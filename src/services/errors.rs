use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Failures surfaced by the service layer to its callers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Rejected input. No data source access happened.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{resource} not found with {field}: '{value}'")]
    NotFound {
        resource: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        ServiceError::NotFound {
            resource,
            field: "id",
            value: id.to_string(),
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::not_found("Entity", "unknown"),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_resource() {
        let err = ServiceError::not_found("Doctor", 9);
        assert_eq!(err.to_string(), "Doctor not found with id: '9'");
    }

    #[test]
    fn repository_failures_are_internal() {
        let err = ServiceError::from(RepositoryError::ConnectionError("down".into()));
        assert!(matches!(err, ServiceError::Internal(_)));
    }
}
