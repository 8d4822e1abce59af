//! Uniform JSON envelope wrapped around every API response.

use serde::{Deserialize, Serialize};

pub const MESSAGE_GET: &str = "GET operation completed successfully";
pub const MESSAGE_POST: &str = "POST operation completed successfully";
pub const MESSAGE_PUT: &str = "PUT operation completed successfully";
pub const MESSAGE_INTERNAL_ERROR: &str = "Internal server error";

/// `code` is the HTTP status rendered as a string. `totalrows` and `data`
/// are omitted from the JSON when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totalrows: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ResponseEnvelope<T> {
    pub fn new(
        status: u16,
        message: impl Into<String>,
        totalrows: Option<usize>,
        data: Option<T>,
    ) -> Self {
        Self {
            code: status.to_string(),
            message: message.into(),
            totalrows,
            data,
        }
    }

    /// Envelope for a single entity; `totalrows` is 1.
    pub fn single(status: u16, message: impl Into<String>, data: T) -> Self {
        Self::new(status, message, Some(1), Some(data))
    }

    /// Envelope without a row count.
    pub fn plain(status: u16, message: impl Into<String>, data: T) -> Self {
        Self::new(status, message, None, Some(data))
    }
}

impl<T> ResponseEnvelope<Vec<T>> {
    /// Envelope for a list; `totalrows` is the list length.
    pub fn list(status: u16, message: impl Into<String>, items: Vec<T>) -> Self {
        Self::new(status, message, Some(items.len()), Some(items))
    }
}
