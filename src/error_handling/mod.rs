//! Error handling.
//!
//! This module provides:
//! - The user-facing `TrackingError` and the construction errors
//! - Failure categories for per-endpoint attempts
//! - The user-facing message catalogue
//!
//! Failures are categorized into:
//! - **Validation**: barcode rejected before any request
//! - **Transport / UpstreamStatus / EmptyBody / Decode / Shape**: one endpoint attempt failed
//! - **Aggregate**: every configured endpoint failed

mod categorization;
pub mod messages;
mod types;

// Re-export public API
pub(crate) use categorization::attempt_error_from_reqwest;
pub use categorization::categorize_reqwest_error;
pub(crate) use types::AttemptError;
pub use types::{ClientBuildError, FailureKind, InitializationError, TrackingError};
