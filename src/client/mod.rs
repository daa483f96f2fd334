//! Resilient tracking client.
//!
//! Tries an ordered list of endpoint variants for a barcode. Each attempt builds
//! the request for that variant, sends it, decodes the body and normalizes it.
//! The first attempt that yields a normalizable JSON payload wins, even when the
//! result is sparse. When every attempt fails, their messages are deduplicated
//! and joined into one `TrackingError`.
//!
//! There is no retry of the same endpoint: falling back to the next endpoint
//! variant is the only retry.

mod aggregate;
mod request;
mod response;

use std::time::Duration;

use log::{debug, error, info, warn};
use reqwest::header::HeaderValue;

use crate::config::{default_endpoints, ClientConfig, DEFAULT_USER_AGENT};
use crate::error_handling::messages::EMPTY_BARCODE;
use crate::error_handling::{
    attempt_error_from_reqwest, AttemptError, ClientBuildError, FailureKind, TrackingError,
};
use crate::initialization::init_http_client;
use crate::models::{EndpointConfig, TrackingResult};
use crate::normalize::normalize;
use aggregate::FailureLog;
use request::{build_request, PreparedEndpoint};
use response::read_json_body;

/// Client for the Iran Post parcel tracking service.
///
/// Holds no mutable state, so one instance (or clones of it) can serve
/// concurrent `track` calls.
///
/// # Examples
///
/// ```no_run
/// use iranpost_tracker::{ClientConfig, TrackingClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = TrackingClient::new(ClientConfig::default())?;
/// let result = client.track("123456789012345678901234").await?;
/// for event in &result.events {
///     println!("{} {}", event.date.as_deref().unwrap_or("-"), event.description);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TrackingClient {
    http: reqwest::Client,
    endpoints: Vec<PreparedEndpoint>,
    timeout: Duration,
    user_agent: String,
    user_agent_header: HeaderValue,
}

impl TrackingClient {
    /// Creates a client from `config`.
    ///
    /// Endpoint selection: the single `endpoint` URL (GET, query string,
    /// `barcode` field), else the explicit `endpoints` list, else the built-in
    /// list from `default_endpoints()`.
    ///
    /// # Errors
    ///
    /// Returns an error if both `endpoint` and `endpoints` are set, if
    /// `endpoints` is empty, if an endpoint URL or header is invalid, or if the
    /// HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ClientBuildError> {
        let endpoints = resolve_endpoints(config.endpoint, config.endpoints)?
            .into_iter()
            .map(PreparedEndpoint::new)
            .collect::<Result<Vec<_>, _>>()?;

        let user_agent = config
            .user_agent
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let user_agent_header =
            HeaderValue::from_str(&user_agent).map_err(|e| ClientBuildError::InvalidHeader {
                name: "User-Agent".to_string(),
                reason: e.to_string(),
            })?;

        let http = init_http_client(config.timeout, &user_agent)?;

        debug!(
            "Tracking client ready with {} endpoint(s), timeout {:?}",
            endpoints.len(),
            config.timeout
        );

        Ok(Self {
            http,
            endpoints,
            timeout: config.timeout,
            user_agent,
            user_agent_header,
        })
    }

    /// The configured endpoints, in the order they are tried.
    pub fn endpoints(&self) -> impl Iterator<Item = &EndpointConfig> {
        self.endpoints.iter().map(|endpoint| &endpoint.config)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Tracks `barcode` across the configured endpoints.
    ///
    /// The barcode is trimmed; an empty barcode fails before any request is sent.
    ///
    /// # Errors
    ///
    /// Returns a `TrackingError` for an empty barcode, or one carrying the
    /// deduplicated messages of every endpoint when all of them fail.
    pub async fn track(&self, barcode: &str) -> Result<TrackingResult, TrackingError> {
        let barcode = barcode.trim();
        if barcode.is_empty() {
            return Err(TrackingError::new(EMPTY_BARCODE));
        }

        let total = self.endpoints.len();
        let mut failures = FailureLog::default();

        for (index, endpoint) in self.endpoints.iter().enumerate() {
            debug!(
                "Tracking {barcode} via endpoint {}/{total}: {} {}",
                index + 1,
                endpoint.config.method,
                endpoint.url
            );

            match self.attempt(endpoint, barcode).await {
                Ok(result) => {
                    info!(
                        "Tracked {barcode} via {} ({} event(s))",
                        endpoint.url,
                        result.events.len()
                    );
                    return Ok(result);
                }
                Err(e) => {
                    warn!(
                        "Endpoint {} failed for {barcode}: {} ({})",
                        endpoint.url, e.message, e.kind
                    );
                    failures.record(e.message);
                }
            }
        }

        let distinct = failures.len();
        let error = failures.into_error();
        error!(
            "{} for {barcode} after {total} attempt(s), {distinct} distinct failure(s): {error}",
            FailureKind::Aggregate
        );
        Err(error)
    }

    async fn attempt(
        &self,
        endpoint: &PreparedEndpoint,
        barcode: &str,
    ) -> Result<TrackingResult, AttemptError> {
        let request = build_request(&self.http, endpoint, barcode, &self.user_agent_header)?;

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| attempt_error_from_reqwest(&e))?;

        let payload = read_json_body(response).await?;

        normalize(&payload, barcode).map_err(|e| AttemptError::new(FailureKind::Shape, e.message()))
    }
}

fn resolve_endpoints(
    endpoint: Option<String>,
    endpoints: Option<Vec<EndpointConfig>>,
) -> Result<Vec<EndpointConfig>, ClientBuildError> {
    let endpoint = endpoint.filter(|url| !url.trim().is_empty());
    match (endpoint, endpoints) {
        (Some(_), Some(_)) => Err(ClientBuildError::ConflictingEndpoints),
        (Some(url), None) => Ok(vec![EndpointConfig::new(url.trim())]),
        (None, Some(list)) if list.is_empty() => Err(ClientBuildError::NoEndpoints),
        (None, Some(list)) => Ok(list),
        (None, None) => Ok(default_endpoints()),
    }
}
