//! Web front end.
//!
//! This module provides barcode validation, HTML rendering of the tracking page,
//! and the HTTP server exposing the form and the JSON API.

pub mod barcode;
pub mod render;
pub mod server;

// Re-export public API
pub use barcode::validate_barcode;
pub use render::{render_page, PageContext};
pub use server::{build_router, serve, start_server, AppState};
