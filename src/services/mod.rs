pub mod doctors;
pub mod errors;
pub mod specialties;

pub use errors::{ServiceError, ServiceResult};
