//! HTTP client creation and configuration utilities

use crate::constants::USER_AGENT;
use reqwest::Client;
use std::time::Duration;

/// Creates the HTTP client shared by every provider request.
///
/// The timeout bounds each request end to end so a slow upstream cannot
/// hang the process. There is no retry layer on top of it.
///
/// # Arguments
/// * `timeout_seconds` - Per-request timeout
///
/// # Returns
/// * `Result<Client, reqwest::Error>` - A configured reqwest HTTP client or error
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(USER_AGENT)
        .build()
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}
