//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

/// Initializes the HTTP client used for upstream tracking requests.
///
/// Creates a `reqwest::Client` configured with:
/// - A timeout covering the whole exchange (connect + read)
/// - The given User-Agent header
/// - Redirect following (reqwest default, up to 10 hops)
/// - Rustls TLS backend with standard certificate validation
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails (for example an invalid
/// User-Agent value).
pub fn init_http_client(
    timeout: Duration,
    user_agent: &str,
) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_http_client() {
        let client = init_http_client(Duration::from_secs(5), "IranPostTracker/test");
        assert!(client.is_ok());
    }

    #[test]
    fn test_init_http_client_rejects_invalid_user_agent() {
        let client = init_http_client(Duration::from_secs(5), "bad\nagent");
        assert!(client.is_err());
    }
}
