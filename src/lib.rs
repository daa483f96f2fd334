//! iranpost_tracker library: resilient Iran Post parcel tracking
//!
//! This library queries the Iran Post tracking service through an ordered list
//! of endpoint variants, falls back across them when one fails, and normalizes
//! whatever JSON shape comes back into a single [`TrackingResult`].
//!
//! # Example
//!
//! ```no_run
//! use iranpost_tracker::{ClientConfig, TrackingClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TrackingClient::new(ClientConfig::default())?;
//! match client.track("123456789012345678901234").await {
//!     Ok(result) => println!("{} event(s)", result.events.len()),
//!     Err(e) => eprintln!("{}", e.message()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The normalizer can also be used on its own:
//!
//! ```
//! use iranpost_tracker::normalize;
//! use serde_json::json;
//!
//! let payload = json!({"data": {"Status": "Delivered", "history": [{"state": "Accepted"}]}});
//! let result = normalize(&payload, "12345").unwrap();
//! assert_eq!(result.current_status.as_deref(), Some("Delivered"));
//! assert_eq!(result.events[0].description, "Accepted");
//! ```
//!
//! # Requirements
//!
//! `TrackingClient::track` and the web server require a Tokio runtime.

pub mod app;
pub mod client;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod models;
pub mod normalize;

// Re-export public API
pub use app::{start_server, validate_barcode};
pub use client::TrackingClient;
pub use config::{default_endpoints, load_endpoints, ClientConfig, LogFormat, LogLevel};
pub use error_handling::{ClientBuildError, TrackingError};
pub use models::{EndpointConfig, HttpMethod, PayloadMode, TrackingEvent, TrackingResult};
pub use normalize::normalize;
