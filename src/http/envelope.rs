//! Uniform JSON response envelope.

use serde::{Deserialize, Serialize};

/// The `{success, data, message}` wrapper carried by every API response.
///
/// Successful responses set `success` and usually carry `data`; failures
/// clear `success` and carry a human-readable `message`. Both halves of
/// the crate speak this type: the server serialises it and the client
/// decodes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Payload carried by successful responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable failure description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Wraps a successful payload.
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// A bodyless success confirmation.
    #[must_use]
    pub const fn confirmed() -> Self {
        Self {
            success: true,
            data: None,
            message: None,
        }
    }

    /// Wraps a failure message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}
