//! Error type definitions.
//!
//! This module defines the failure signal surfaced to callers of the tracking
//! client, the construction errors, and the internal failure categories.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// User-facing tracking failure.
///
/// Carries a human-readable message only; every failure path of the client
/// (network, decoding, upstream shape, validation) ends up as one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TrackingError {
    message: String,
}

impl TrackingError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message to display verbatim to the end user.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error types for tracking client construction.
#[derive(Error, Debug)]
pub enum ClientBuildError {
    /// Both a single endpoint and an endpoint list were supplied.
    #[error("Provide either 'endpoint' or 'endpoints', not both")]
    ConflictingEndpoints,

    /// An explicit endpoint list was supplied but it is empty.
    #[error("Endpoint list must not be empty")]
    NoEndpoints,

    /// An endpoint URL could not be parsed.
    #[error("Invalid endpoint URL '{url}': {source}")]
    InvalidEndpointUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A header name or value (user agent or endpoint header) is not valid HTTP.
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Categories of tracking failures.
///
/// Used to label log output. Callers only ever see the `TrackingError` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    /// Barcode rejected before any request was sent
    Validation,
    /// Connection refused, DNS failure or timeout
    Transport,
    /// Non-2xx HTTP status
    UpstreamStatus,
    /// 2xx response with an empty body
    EmptyBody,
    /// Body claims to be JSON but does not parse
    Decode,
    /// Body is not a structure the normalizer understands
    Shape,
    /// Every configured endpoint failed
    Aggregate,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Validation => "Validation error",
            FailureKind::Transport => "Transport error",
            FailureKind::UpstreamStatus => "Upstream status error",
            FailureKind::EmptyBody => "Empty response body",
            FailureKind::Decode => "Decode error",
            FailureKind::Shape => "Unsupported response shape",
            FailureKind::Aggregate => "All endpoints failed",
        }
    }
}

/// Failure of a single endpoint attempt.
///
/// Kept inside the client; only `message` survives into the aggregated error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AttemptError {
    pub kind: FailureKind,
    pub message: String,
}

impl AttemptError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<AttemptError> for TrackingError {
    fn from(error: AttemptError) -> Self {
        TrackingError::new(error.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_tracking_error_displays_message_verbatim() {
        let error = TrackingError::new("پاسخ خالی از سرویس رهگیری دریافت شد.");
        assert_eq!(error.to_string(), "پاسخ خالی از سرویس رهگیری دریافت شد.");
        assert_eq!(error.message(), error.to_string());
    }

    #[test]
    fn test_all_failure_kinds_have_string_representation() {
        for kind in FailureKind::iter() {
            assert!(!kind.as_str().is_empty(), "{:?} should have non-empty string", kind);
        }
    }

    #[test]
    fn test_attempt_error_converts_to_message_only() {
        let attempt = AttemptError::new(FailureKind::Decode, "bad json");
        let error: TrackingError = attempt.into();
        assert_eq!(error, TrackingError::new("bad json"));
    }

    #[test]
    fn test_client_build_error_messages() {
        assert_eq!(
            ClientBuildError::ConflictingEndpoints.to_string(),
            "Provide either 'endpoint' or 'endpoints', not both"
        );
        let invalid = ClientBuildError::InvalidEndpointUrl {
            url: "not a url".to_string(),
            source: url::ParseError::RelativeUrlWithoutBase,
        };
        assert!(invalid.to_string().contains("not a url"));
    }
}
