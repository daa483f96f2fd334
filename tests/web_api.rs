//! Tests of the web front end served on an ephemeral local port.

use std::net::SocketAddr;
use std::time::Duration;

use iranpost_tracker::app::serve;
use iranpost_tracker::error_handling::messages::{BARCODE_NOT_NUMERIC, BARCODE_REQUIRED};
use iranpost_tracker::{ClientConfig, EndpointConfig, TrackingClient};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use wiremock::matchers::{path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Starts the front end backed by a single mock upstream endpoint.
async fn start_front_end(upstream: &MockServer) -> SocketAddr {
    let client = TrackingClient::new(ClientConfig {
        endpoints: Some(vec![EndpointConfig::new(format!("{}/track", upstream.uri()))]),
        timeout: Duration::from_secs(2),
        ..Default::default()
    })
    .expect("Failed to build tracking client");

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = serve(listener, client).await;
    });
    addr
}

async fn mount_delivered(upstream: &MockServer, barcode: &str) {
    Mock::given(path("/track"))
        .and(query_param("barcode", barcode))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {"CurrentStatus": "Delivered", "events": [{"status": "Delivered"}]}
        })))
        .mount(upstream)
        .await;
}

async fn post_json(addr: SocketAddr, body: &str) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("http://{addr}/api/track"))
        .header("content-type", "application/json")
        .body(body.to_string())
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    let text = response.text().await.unwrap();
    (status, serde_json::from_str(&text).unwrap())
}

#[tokio::test]
async fn test_health() {
    let upstream = MockServer::start().await;
    let addr = start_front_end(&upstream).await;

    let response = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = serde_json::from_str(&response.text().await.unwrap()).unwrap();
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_api_track_success() {
    let upstream = MockServer::start().await;
    mount_delivered(&upstream, "12345").await;
    let addr = start_front_end(&upstream).await;

    let (status, body) = post_json(addr, r#"{"barcode": " ۱۲۳۴۵ "}"#).await;

    assert_eq!(status, 200);
    assert_eq!(body["barcode"], "12345");
    assert_eq!(body["current_status"], "Delivered");
    assert_eq!(body["events"][0]["description"], "Delivered");
    assert_eq!(body["events"][0]["date"], Value::Null);
    assert!(body["raw_response"].is_object());
}

#[tokio::test]
async fn test_api_track_numeric_barcode() {
    let upstream = MockServer::start().await;
    mount_delivered(&upstream, "12345").await;
    let addr = start_front_end(&upstream).await;

    let (status, body) = post_json(addr, r#"{"barcode": 12345}"#).await;

    assert_eq!(status, 200);
    assert_eq!(body["barcode"], "12345");
}

#[tokio::test]
async fn test_api_track_validation_errors() {
    let upstream = MockServer::start().await;
    Mock::given(path("/track"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&upstream)
        .await;
    let addr = start_front_end(&upstream).await;

    let (status, body) = post_json(addr, r#"{"barcode": "12a45"}"#).await;
    assert_eq!(status, 400);
    assert_eq!(body, json!({"error": BARCODE_NOT_NUMERIC}));

    // Unparsable bodies are treated as a missing barcode
    let (status, body) = post_json(addr, "not json").await;
    assert_eq!(status, 400);
    assert_eq!(body, json!({"error": BARCODE_REQUIRED}));
}

#[tokio::test]
async fn test_api_track_upstream_failure_is_bad_request() {
    let upstream = MockServer::start().await;
    Mock::given(path("/track"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&upstream)
        .await;
    let addr = start_front_end(&upstream).await;

    let (status, body) = post_json(addr, r#"{"barcode": "12345"}"#).await;

    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn test_form_page_round_trip() {
    let upstream = MockServer::start().await;
    mount_delivered(&upstream, "12345").await;
    let addr = start_front_end(&upstream).await;
    let http = reqwest::Client::new();

    let page = http
        .get(format!("http://{addr}/"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains(r#"name="barcode""#));

    let page = http
        .post(format!("http://{addr}/"))
        .header("content-type", "application/x-www-form-urlencoded")
        .body("barcode=12345")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("Delivered"));
    assert!(!page.contains(r#"class="error""#));

    let page = http
        .post(format!("http://{addr}/"))
        .header("content-type", "application/x-www-form-urlencoded")
        .body("barcode=12")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains(r#"class="error""#));
    assert!(page.contains(r#"value="12""#));
}
