//! Response classification and body decoding.

use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::error_handling::messages::{
    status_code_message, EMPTY_RESPONSE, INVALID_RESPONSE, UNSUPPORTED_STRUCTURE,
};
use crate::error_handling::{attempt_error_from_reqwest, AttemptError, FailureKind};

/// Reads a response and decodes its body as JSON.
///
/// # Errors
///
/// Returns an `AttemptError` for a non-2xx status, a body read failure, or any
/// of the `decode_body` failures.
pub(crate) async fn read_json_body(response: reqwest::Response) -> Result<Value, AttemptError> {
    let status = response.status();
    if !status.is_success() {
        return Err(AttemptError::new(
            FailureKind::UpstreamStatus,
            status_code_message(status.as_u16()),
        ));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let bytes = response
        .bytes()
        .await
        .map_err(|e| attempt_error_from_reqwest(&e))?;

    decode_body(&content_type, &bytes)
}

/// Decodes a raw body.
///
/// The body is parsed as JSON when the content type mentions `json` or the
/// trimmed body starts with `{` or `[`. A non-JSON body starting with one of
/// those characters is therefore reported as invalid rather than unsupported.
pub(crate) fn decode_body(content_type: &str, bytes: &[u8]) -> Result<Value, AttemptError> {
    let text = String::from_utf8_lossy(bytes);
    let text = text.trim();

    if text.is_empty() {
        return Err(AttemptError::new(FailureKind::EmptyBody, EMPTY_RESPONSE));
    }

    if content_type.contains("json") || text.starts_with('{') || text.starts_with('[') {
        return serde_json::from_str(text).map_err(|e| {
            log::debug!("Failed to parse response body as JSON: {e}");
            AttemptError::new(FailureKind::Decode, INVALID_RESPONSE)
        });
    }

    Err(AttemptError::new(FailureKind::Shape, UNSUPPORTED_STRUCTURE))
}
