//! Error categorization.
//!
//! Maps transport-level failures onto `FailureKind` and the message shown to users.

use super::messages::{status_code_message, CONNECTION_FAILED, INVALID_RESPONSE};
use super::types::{AttemptError, FailureKind};

/// Categorizes a `reqwest::Error` into a `FailureKind`.
///
/// Status errors map to `UpstreamStatus`, decode errors to `Decode`, and
/// everything else (connect, timeout, request, body) to `Transport`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FailureKind {
    if error.status().is_some() {
        FailureKind::UpstreamStatus
    } else if error.is_decode() {
        FailureKind::Decode
    } else {
        FailureKind::Transport
    }
}

/// Converts a `reqwest::Error` into the attempt failure recorded by the client.
pub(crate) fn attempt_error_from_reqwest(error: &reqwest::Error) -> AttemptError {
    let kind = categorize_reqwest_error(error);
    log::debug!(
        "Request error: {} (kind: {}, is_timeout: {}, is_connect: {})",
        error,
        kind,
        error.is_timeout(),
        error.is_connect()
    );
    let message = match kind {
        FailureKind::UpstreamStatus => error
            .status()
            .map(|status| status_code_message(status.as_u16()))
            .unwrap_or_else(|| CONNECTION_FAILED.to_string()),
        FailureKind::Decode => INVALID_RESPONSE.to_string(),
        _ => CONNECTION_FAILED.to_string(),
    };
    AttemptError::new(kind, message)
}
