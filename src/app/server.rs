//! Web front end for the tracking client.
//!
//! Provides four routes:
//! - `GET /` - tracking form
//! - `POST /` - form submission, renders the result or the error message
//! - `POST /api/track` - JSON API
//! - `GET /health` - readiness probe, independent of the tracking client

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use super::barcode::validate_barcode;
use super::render::{render_page, PageContext};
use crate::client::TrackingClient;
use crate::error_handling::TrackingError;
use crate::models::TrackingResult;
use crate::normalize::coerce_to_string;

/// Shared state for the web handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<TrackingClient>,
}

impl AppState {
    pub fn new(client: TrackingClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TrackForm {
    #[serde(default)]
    barcode: String,
}

/// Builds the router with all front-end routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler).post(form_handler))
        .route("/api/track", post(api_track_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Binds `host:port` and serves the front end until the server fails.
pub async fn start_server(host: &str, port: u16, client: TrackingClient) -> Result<(), anyhow::Error> {
    let listener = TcpListener::bind((host, port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind web server to {}:{}: {}", host, port, e))?;

    log::info!("Web server listening on http://{}:{}/", host, port);
    log::info!("  - API: http://{}:{}/api/track", host, port);
    log::info!("  - Health: http://{}:{}/health", host, port);

    serve(listener, client).await
}

/// Serves the front end on an already bound listener.
pub async fn serve(listener: TcpListener, client: TrackingClient) -> Result<(), anyhow::Error> {
    axum::serve(listener, build_router(AppState::new(client)))
        .await
        .map_err(|e| anyhow::anyhow!("Web server error: {}", e))
}

async fn track_input(client: &TrackingClient, input: &str) -> Result<(String, TrackingResult), TrackingError> {
    let barcode = validate_barcode(input)?;
    let result = client.track(&barcode).await?;
    Ok((barcode, result))
}

async fn index_handler() -> Html<String> {
    Html(render_page(&PageContext::default()))
}

async fn form_handler(State(state): State<AppState>, Form(form): Form<TrackForm>) -> Html<String> {
    let context = match track_input(&state.client, &form.barcode).await {
        Ok((barcode, result)) => PageContext {
            barcode,
            result: Some(result),
            error: None,
        },
        Err(e) => {
            log::debug!("Form tracking failed: {}", e);
            PageContext {
                barcode: form.barcode,
                result: None,
                error: Some(e.message().to_string()),
            }
        }
    };
    Html(render_page(&context))
}

/// Reads `barcode` from a JSON body; anything unparsable counts as an empty body.
fn barcode_from_body(body: &[u8]) -> String {
    let payload: Value = serde_json::from_slice(body).unwrap_or_else(|_| json!({}));
    match payload.get("barcode") {
        Some(Value::String(s)) => s.clone(),
        Some(value @ Value::Number(_)) => coerce_to_string(value),
        _ => String::new(),
    }
}

async fn api_track_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let input = barcode_from_body(&body);
    match track_input(&state.client, &input).await {
        Ok((_, result)) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.message() })),
        )
            .into_response(),
    }
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
