//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, default endpoints, barcode limits)
//! - Client configuration and CLI option types
//! - Endpoint list loading from JSON files

mod constants;
mod endpoints;
mod types;

// Re-export all constants
pub use constants::*;
pub use endpoints::{default_endpoints, load_endpoints};
pub use types::{ClientConfig, Command, LogFormat, LogLevel, Opt};
