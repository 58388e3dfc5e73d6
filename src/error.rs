//! Error types for puttlink
//!
//! Provides a unified error type for all device operations.

use thiserror::Error;

/// Result type alias using DeviceError
pub type Result<T> = std::result::Result<T, DeviceError>;

/// Unified error type for device protocol operations
#[derive(Debug, Error)]
pub enum DeviceError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    /// The request never produced an HTTP response (refused, timed out, DNS)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Device could not be reached through a custom [`Transport`].
    ///
    /// Implementations that do not use reqwest report connection refused,
    /// timeouts and similar failures here (see [`DeviceError::unreachable`]),
    /// so callers can treat them like [`DeviceError::Transport`].
    ///
    /// [`Transport`]: crate::network::Transport
    #[error("Request failed: {0}")]
    Unreachable(String),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    /// Payload rejected before transmission
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Response body does not match the record the endpoint promises
    #[error("Decode error: {0}")]
    Decode(String),

    /// Non-success status on an endpoint whose body is decoded
    #[error("Device returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Output Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DeviceError {
    /// Transport failure from a custom [`Transport`](crate::network::Transport)
    pub fn unreachable(reason: impl Into<String>) -> Self {
        DeviceError::Unreachable(reason.into())
    }

    /// True when the device could not be reached at all
    pub fn is_transport(&self) -> bool {
        matches!(self, DeviceError::Transport(_) | DeviceError::Unreachable(_))
    }
}
