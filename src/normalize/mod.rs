//! Response normalization.
//!
//! Turns one decoded upstream JSON value into a `TrackingResult`, tolerating the
//! union of response shapes the tracking API variants have produced:
//! - a root-level array of events
//! - the tracking object wrapped in `result`/`Result`/`data`/`Data`
//! - event arrays under any of several keys, with per-event field aliases
//!
//! Normalization is a pure function of its inputs and never mutates the payload.

pub mod aliases;

use std::borrow::Cow;

use serde_json::{json, Map, Value};

use crate::error_handling::messages::{UNKNOWN_STATUS, UNSUPPORTED_STRUCTURE};
use crate::error_handling::TrackingError;
use crate::models::{TrackingEvent, TrackingResult};
use aliases::*;

/// Normalizes an upstream payload into a `TrackingResult` for `barcode`.
///
/// # Errors
///
/// Returns a `TrackingError` when the payload is neither a JSON object nor a
/// JSON array.
///
/// # Examples
///
/// ```
/// use iranpost_tracker::normalize;
/// use serde_json::json;
///
/// let payload = json!({"data": {"SenderName": "Ali", "Events": [{"state": "Delivered"}]}});
/// let result = normalize(&payload, "123456").unwrap();
/// assert_eq!(result.sender.as_deref(), Some("Ali"));
/// assert_eq!(result.events[0].description, "Delivered");
/// assert_eq!(result.raw_response, payload);
/// ```
pub fn normalize(payload: &Value, barcode: &str) -> Result<TrackingResult, TrackingError> {
    let root: Cow<'_, Value> = match payload {
        Value::Array(items) => Cow::Owned(json!({ "events": items })),
        other => Cow::Borrowed(other),
    };

    if !root.is_object() {
        return Err(TrackingError::new(UNSUPPORTED_STRUCTURE));
    }

    let root: &Value = &root;
    let data = first_truthy(root, WRAPPER_KEYS).unwrap_or(root);

    Ok(TrackingResult {
        barcode: barcode.to_string(),
        current_status: first_truthy_string(data, CURRENT_STATUS_KEYS),
        sender: first_truthy_string(data, SENDER_KEYS),
        receiver: first_truthy_string(data, RECEIVER_KEYS),
        events: extract_events(data),
        raw_response: payload.clone(),
    })
}

/// Extracts the event history from the working object.
///
/// The first key in `EVENT_LIST_KEYS` holding a non-empty array wins and later
/// keys are never consulted. A bare array is treated as the event list itself.
fn extract_events(data: &Value) -> Vec<TrackingEvent> {
    if let Value::Object(map) = data {
        let list = EVENT_LIST_KEYS.iter().find_map(|key| match map.get(*key) {
            Some(Value::Array(items)) if !items.is_empty() => Some(items),
            _ => None,
        });
        if let Some(items) = list {
            return events_from_records(items);
        }
    }

    match data {
        Value::Array(items) => events_from_records(items),
        _ => Vec::new(),
    }
}

fn events_from_records(items: &[Value]) -> Vec<TrackingEvent> {
    items
        .iter()
        .filter_map(Value::as_object)
        .map(event_from_record)
        .collect()
}

fn event_from_record(record: &Map<String, Value>) -> TrackingEvent {
    TrackingEvent {
        description: first_truthy_in(record, DESCRIPTION_KEYS)
            .map(coerce_to_string)
            .unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
        date: first_truthy_in(record, DATE_KEYS).map(coerce_to_string),
        time: first_truthy_in(record, TIME_KEYS).map(coerce_to_string),
        location: first_truthy_in(record, LOCATION_KEYS).map(coerce_to_string),
    }
}

/// Returns whether a value counts as present.
///
/// `null`, `false`, zero, and empty strings, arrays and objects are all absent.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Returns the first truthy value among `keys` when `value` is an object.
pub fn first_truthy<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    value.as_object().and_then(|map| first_truthy_in(map, keys))
}

fn first_truthy_in<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| map.get(*key))
        .find(|value| is_truthy(value))
}

fn first_truthy_string(value: &Value, keys: &[&str]) -> Option<String> {
    first_truthy(value, keys).map(coerce_to_string)
}

/// Renders a JSON value as display text: strings as-is, anything else as JSON.
pub fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
