//! Configuration constants.
//!
//! This module defines the defaults used by the tracking client and the front end,
//! including timeouts, the built-in endpoint variants and barcode limits.

use std::time::Duration;

/// Per-exchange timeout (connect + read) in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

/// Default User-Agent string for upstream requests.
///
/// Users can override this via the `--user-agent` CLI flag or
/// `ClientConfig::user_agent`.
pub const DEFAULT_USER_AGENT: &str = "IranPostTracker/2.0 (+https://github.com/)";

/// Payload field carrying the barcode when an endpoint does not name one.
pub const DEFAULT_BARCODE_FIELD: &str = "barcode";

/// Environment variable holding a single endpoint URL override.
///
/// Only the binary reads it (through clap); the client never touches the environment.
pub const ENDPOINT_ENV_VAR: &str = "IRAN_POST_ENDPOINT";

// Built-in endpoint variants, tried in this order
/// Current REST API: GET with the barcode in the query string
pub const TRACK_RESULT_BY_BARCODE_URL: &str =
    "https://api.post.ir/postapi/v1/TrackAndTrace/TrackResultByBarcode";
/// Legacy tracking API: POST with a JSON body
pub const GET_TRACK_BY_BARCODE_URL: &str =
    "https://tracking.post.ir/api/tracking/GetTrackByBarcode";
/// Oldest tracking API: POST with a form-encoded body
pub const GET_TRACK_URL: &str = "https://tracking.post.ir/api/tracking/GetTrack";

// Barcode validation (front end only)
/// Minimum number of digits in a barcode
pub const BARCODE_MIN_LENGTH: usize = 5;
/// Maximum number of digits in a barcode
pub const BARCODE_MAX_LENGTH: usize = 30;

// Web front end
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8000;
