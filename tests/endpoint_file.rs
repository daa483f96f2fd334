//! Tests for loading endpoint lists from JSON files.

use std::io::Write;

use iranpost_tracker::{load_endpoints, HttpMethod, PayloadMode};
use tempfile::NamedTempFile;

fn file_with(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_endpoints_from_file() {
    let file = file_with(
        r#"[
            {"url": "https://a.example/track"},
            {
                "url": "https://b.example/track",
                "method": "POST",
                "payload": "form",
                "barcode_field": "code",
                "extra_payload": {"lang": "fa"},
                "headers": {"Authorization": "Bearer x"}
            }
        ]"#,
    );

    let endpoints = load_endpoints(file.path()).unwrap();

    assert_eq!(endpoints.len(), 2);
    assert_eq!(endpoints[0].method, HttpMethod::Get);
    assert_eq!(endpoints[0].payload_mode, PayloadMode::Query);
    assert_eq!(endpoints[0].barcode_field, "barcode");
    assert_eq!(endpoints[1].method, HttpMethod::Post);
    assert_eq!(endpoints[1].payload_mode, PayloadMode::Form);
    assert_eq!(endpoints[1].barcode_field, "code");
    assert_eq!(endpoints[1].extra_payload["lang"], "fa");
    assert_eq!(endpoints[1].headers["Authorization"], "Bearer x");
}

#[test]
fn test_load_endpoints_rejects_empty_list() {
    let file = file_with("[]");
    let error = load_endpoints(file.path()).unwrap_err();
    assert!(error.to_string().contains("contains no endpoints"));
}

#[test]
fn test_load_endpoints_rejects_invalid_json() {
    let file = file_with(r#"[{"method": "GET"}]"#);
    let error = load_endpoints(file.path()).unwrap_err();
    assert!(error.to_string().contains("Failed to parse endpoints file"));
}

#[test]
fn test_load_endpoints_accepts_lowercase_method() {
    let file = file_with(
        r#"[
            {"url": "https://a.example/track", "method": "post", "payload": "json"},
            {"url": "https://b.example/track", "method": "Get"}
        ]"#,
    );

    let endpoints = load_endpoints(file.path()).unwrap();

    assert_eq!(endpoints[0].method, HttpMethod::Post);
    assert_eq!(endpoints[0].payload_mode, PayloadMode::Json);
    assert_eq!(endpoints[1].method, HttpMethod::Get);
}
