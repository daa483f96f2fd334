//! Aggregation of per-endpoint failure messages.

use crate::error_handling::messages::{MESSAGE_SEPARATOR, NO_RESPONSE};
use crate::error_handling::TrackingError;

/// Ordered, deduplicated record of failure messages from one `track` call.
#[derive(Debug, Default)]
pub(crate) struct FailureLog {
    messages: Vec<String>,
}

impl FailureLog {
    /// Records a message unless an identical one was already recorded.
    pub(crate) fn record(&mut self, message: String) {
        if !self.messages.contains(&message) {
            self.messages.push(message);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.messages.len()
    }

    /// Joins the recorded messages, in first-occurrence order, into one error.
    pub(crate) fn into_error(self) -> TrackingError {
        if self.messages.is_empty() {
            return TrackingError::new(NO_RESPONSE);
        }
        TrackingError::new(self.messages.join(MESSAGE_SEPARATOR))
    }
}
