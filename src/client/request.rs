//! Outgoing request construction.
//!
//! Builds the payload for one endpoint and encodes it per the endpoint's method
//! and payload mode: GET puts it in the query string, otherwise it becomes a
//! JSON or form-encoded body.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT};
use serde_json::{Map, Value};
use url::Url;

use crate::error_handling::{attempt_error_from_reqwest, AttemptError, ClientBuildError};
use crate::models::{EndpointConfig, HttpMethod, PayloadMode};
use crate::normalize::coerce_to_string;

const CONTENT_TYPE_JSON: &str = "application/json";
const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// An endpoint whose URL and fixed headers were validated at construction time.
#[derive(Debug, Clone)]
pub(crate) struct PreparedEndpoint {
    pub config: EndpointConfig,
    pub url: Url,
    pub headers: HeaderMap,
}

impl PreparedEndpoint {
    pub(crate) fn new(config: EndpointConfig) -> Result<Self, ClientBuildError> {
        let url = Url::parse(&config.url).map_err(|source| ClientBuildError::InvalidEndpointUrl {
            url: config.url.clone(),
            source,
        })?;

        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                ClientBuildError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| ClientBuildError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }

        Ok(Self {
            config,
            url,
            headers,
        })
    }
}

/// Returns the endpoint's fixed extra fields plus the barcode under the
/// endpoint's barcode field name.
pub(crate) fn build_payload(endpoint: &EndpointConfig, barcode: &str) -> Map<String, Value> {
    let mut payload = endpoint.extra_payload.clone();
    payload.insert(
        endpoint.barcode_field.clone(),
        Value::String(barcode.to_string()),
    );
    payload
}

fn form_pairs(payload: &Map<String, Value>) -> Vec<(String, String)> {
    payload
        .iter()
        .map(|(key, value)| (key.clone(), coerce_to_string(value)))
        .collect()
}

fn form_encode(payload: &Map<String, Value>) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(form_pairs(payload))
        .finish()
}

/// Builds the request for one endpoint attempt.
///
/// Header precedence, lowest first: the client's User-Agent, the content type
/// implied by the payload mode, then the endpoint's fixed headers.
pub(crate) fn build_request(
    client: &reqwest::Client,
    endpoint: &PreparedEndpoint,
    barcode: &str,
    user_agent: &HeaderValue,
) -> Result<reqwest::Request, AttemptError> {
    let payload = build_payload(&endpoint.config, barcode);

    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, user_agent.clone());

    let builder = match endpoint.config.method {
        HttpMethod::Get => {
            let mut url = endpoint.url.clone();
            url.query_pairs_mut().extend_pairs(form_pairs(&payload));
            client.request(reqwest::Method::GET, url)
        }
        method => {
            let (content_type, body) = match endpoint.config.payload_mode {
                PayloadMode::Json => (CONTENT_TYPE_JSON, Value::Object(payload).to_string()),
                PayloadMode::Form | PayloadMode::Query => (CONTENT_TYPE_FORM, form_encode(&payload)),
            };
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
            client
                .request(method.into(), endpoint.url.clone())
                .body(body)
        }
    };

    headers.extend(endpoint.headers.clone());

    builder
        .headers(headers)
        .build()
        .map_err(|e| attempt_error_from_reqwest(&e))
}
