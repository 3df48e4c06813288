//! Failure taxonomy for backend requests.
//!
//! ERROR HANDLING
//! ==============
//! Every request failure is caught inside the widget that issued it and
//! mapped to a user-visible outcome there — a canned assistant turn for
//! chat, a blocking notification for upload and report. These variants never
//! cross a widget boundary; the distinction exists for the diagnostic trace
//! only, users see a single "operation failed" behavior either way.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure of one backend request.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (refused, DNS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("server returned status {0}")]
    Status(u16),
    /// The server answered 2xx but the body did not match the contract.
    #[error("malformed response: {0}")]
    Malformed(String),
}
