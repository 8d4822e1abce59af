//! Domain aggregates exposed by the directory service layer.

pub mod doctor;
pub mod specialty;
pub mod types;
