//! Generic HTTP fetching with status classification and JSON decoding

use reqwest::RequestBuilder;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::constants::ERROR_BODY_SNIPPET_CHARS;
use crate::error::AppError;

/// Sends a prepared GET request and decodes the JSON body.
///
/// A single attempt is made. Failures are classified as:
/// - timeouts and connection failures as network errors,
/// - HTTP 401 as [`AppError::AuthenticationFailure`],
/// - any other non-2xx as a client/server error carrying the status and a body snippet,
/// - a 2xx body that does not decode as malformed JSON, unexpected structure or no data.
///
/// # Arguments
/// * `request` - Request with URL and any credentials already applied
/// * `url` - The request URL, used for logging and error context
#[instrument(skip(request))]
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
    url: &str,
) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match request.header(ACCEPT, "application/json").send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        let body = response.text().await.unwrap_or_default();
        let message = describe_failure(reason, &body);

        error!("HTTP {} - {} (URL: {})", status_code, message, url);

        return Err(match status_code {
            401 => AppError::authentication_failure(url),
            404 => AppError::api_not_found(message, url),
            400..=499 => AppError::api_client_error(status_code, message, url),
            _ => AppError::api_server_error(status_code, message, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(1024).collect();
    debug!("Response text (first 1024 chars): {preview}");

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!("Response text: {}", body_snippet(&response_text));

            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    format!("Response is not valid JSON: {}", body_snippet(&response_text)),
                    url,
                ))
            } else {
                // Valid JSON but unexpected structure
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

/// Status reason plus whatever the body says, for error messages
fn describe_failure(reason: &str, body: &str) -> String {
    let snippet = body_snippet(body);
    if snippet.is_empty() {
        reason.to_string()
    } else {
        format!("{reason}: {snippet}")
    }
}

/// First characters of a body with runs of whitespace collapsed
pub(crate) fn body_snippet(body: &str) -> String {
    body.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(ERROR_BODY_SNIPPET_CHARS)
        .collect()
}
