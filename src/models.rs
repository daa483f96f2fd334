//! Data types shared by the tracking client, the normalizer and the front end.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// HTTP method used to reach an endpoint variant.
///
/// Serializes as `"GET"`/`"POST"`; deserializes from any letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            other => Err(format!("unsupported HTTP method: {other}")),
        }
    }
}

impl TryFrom<String> for HttpMethod {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

/// How the payload is encoded for non-GET requests.
///
/// GET requests always carry the payload in the query string, whatever the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadMode {
    #[default]
    Query,
    Json,
    Form,
}

/// Configuration descriptor for a single upstream endpoint variant.
///
/// # Examples
///
/// ```
/// use iranpost_tracker::{EndpointConfig, HttpMethod, PayloadMode};
///
/// let endpoint = EndpointConfig::new("https://tracking.example/api/track")
///     .method(HttpMethod::Post)
///     .payload_mode(PayloadMode::Json)
///     .barcode_field("code")
///     .extra_field("lang", "fa");
/// assert_eq!(endpoint.barcode_field, "code");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub url: String,
    #[serde(default)]
    pub method: HttpMethod,
    #[serde(default, rename = "payload")]
    pub payload_mode: PayloadMode,
    #[serde(default = "default_barcode_field")]
    pub barcode_field: String,
    #[serde(default)]
    pub extra_payload: Map<String, Value>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

fn default_barcode_field() -> String {
    crate::config::DEFAULT_BARCODE_FIELD.to_string()
}

impl EndpointConfig {
    /// Creates a GET/query endpoint sending the barcode as `barcode`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::default(),
            payload_mode: PayloadMode::default(),
            barcode_field: default_barcode_field(),
            extra_payload: Map::new(),
            headers: BTreeMap::new(),
        }
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn payload_mode(mut self, mode: PayloadMode) -> Self {
        self.payload_mode = mode;
        self
    }

    pub fn barcode_field(mut self, field: impl Into<String>) -> Self {
        self.barcode_field = field.into();
        self
    }

    pub fn extra_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra_payload.insert(key.into(), value.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// A single reported milestone in a parcel's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingEvent {
    pub description: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
}

/// Canonical tracking answer for one barcode.
///
/// `raw_response` holds the decoded upstream JSON exactly as received, before
/// any unwrapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackingResult {
    pub barcode: String,
    pub current_status: Option<String>,
    pub sender: Option<String>,
    pub receiver: Option<String>,
    pub events: Vec<TrackingEvent>,
    pub raw_response: Value,
}
