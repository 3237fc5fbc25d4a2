use serde::{Deserialize, Serialize};

/// Response envelope returned by every catalog endpoint.
///
/// Carries the status code a second time in the body alongside a
/// human-readable message and the optional payload; `data` serializes to
/// `null` when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 200 envelope with a payload.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status: 200,
            message: message.into(),
            data: Some(data),
        }
    }

    /// 201 envelope with the created payload.
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            status: 201,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Envelope with no payload.
    pub fn message(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            data: None,
        }
    }
}
