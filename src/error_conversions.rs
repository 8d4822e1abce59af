//! Error conversion glue between layers.
//!
//! The domain and form layers must not depend on service/repository error
//! types, so the conversions live here.

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::pagination::SortParseError;
use crate::repository::errors::RepositoryError;
use crate::services::errors::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::InvalidArgument(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

impl From<SortParseError> for ServiceError {
    fn from(val: SortParseError) -> Self {
        ServiceError::InvalidArgument(val.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::InvalidArgument(val.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_errors_are_invalid_arguments() {
        let err = ServiceError::from(SortParseError::Field("rank".into()));
        assert!(matches!(err, ServiceError::InvalidArgument(_)));
    }

    #[test]
    fn type_constraints_are_repository_validation_errors() {
        let err = RepositoryError::from(TypeConstraintError::NonPositiveId);
        assert!(matches!(err, RepositoryError::ValidationError(_)));
    }
}
