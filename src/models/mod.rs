//! Database models shared across the repository layer.

pub mod config;
pub mod doctor;
pub mod specialty;
