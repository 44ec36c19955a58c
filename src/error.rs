//! Error Taxonomy
//!
//! Failures are local to the controller that observed them; there is no
//! process-wide error state and no automatic retry. Three kinds exist:
//!
//! - [`ClientError`]: anything that went wrong talking to the service
//!   (transport failure including timeout, non-2xx status, malformed payload).
//!   Surfaced to the user as a dismissible message.
//! - [`ClassifyError::EmptyInput`]: rejected locally, never reaches the network.
//! - Stale responses are *not* errors. They are discarded silently by the
//!   session controller and never reach this module.

use thiserror::Error;

/// A failed request against the remote service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS, timeout).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status code.
    #[error("server returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not the expected JSON shape.
    #[error("malformed response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A failed classification attempt.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Input was empty after trimming. Caught before any network traffic.
    #[error("text to classify must not be empty")]
    EmptyInput,

    /// The classification endpoint itself failed.
    #[error(transparent)]
    Client(#[from] ClientError),
}
