//! Built-in endpoint list and endpoint list files.

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::config::constants::{GET_TRACK_BY_BARCODE_URL, GET_TRACK_URL, TRACK_RESULT_BY_BARCODE_URL};
use crate::models::{EndpointConfig, HttpMethod, PayloadMode};

/// Returns the well-known Iran Post endpoint variants in priority order.
pub fn default_endpoints() -> Vec<EndpointConfig> {
    vec![
        EndpointConfig::new(TRACK_RESULT_BY_BARCODE_URL)
            .method(HttpMethod::Get)
            .payload_mode(PayloadMode::Query),
        EndpointConfig::new(GET_TRACK_BY_BARCODE_URL)
            .method(HttpMethod::Post)
            .payload_mode(PayloadMode::Json),
        EndpointConfig::new(GET_TRACK_URL)
            .method(HttpMethod::Post)
            .payload_mode(PayloadMode::Form),
    ]
}

/// Loads an ordered endpoint list from a JSON file.
///
/// The file must contain a non-empty JSON array of endpoint objects; omitted
/// fields take the `EndpointConfig::new` defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a valid endpoint array,
/// or contains no endpoints.
pub fn load_endpoints(path: &Path) -> Result<Vec<EndpointConfig>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read endpoints file {}", path.display()))?;
    let endpoints: Vec<EndpointConfig> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse endpoints file {}", path.display()))?;
    if endpoints.is_empty() {
        bail!("Endpoints file {} contains no endpoints", path.display());
    }
    log::debug!(
        "Loaded {} endpoint(s) from {}",
        endpoints.len(),
        path.display()
    );
    Ok(endpoints)
}
