//! Blocking HTTP plumbing shared by the provider clients.

use std::time::Duration;

use reqwest::blocking::{Client, Request};
use serde::de::DeserializeOwned;

use crate::domain::ProviderConfig;
use crate::error::DegreeDayError;

/// Longest slice of an error body we carry into a message.
const ERROR_BODY_LIMIT: usize = 300;

pub fn build_client(config: &ProviderConfig) -> Result<Client, DegreeDayError> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| DegreeDayError::data_source_caused_by("Failed to build HTTP client", None, e))
}

/// Execute a prepared request and decode a JSON body.
///
/// Every failure is reported as `DataSource` with the request URL attached.
pub fn execute_json<T: DeserializeOwned>(
    client: &Client,
    request: Request,
    what: &str,
) -> Result<T, DegreeDayError> {
    let url = request.url().to_string();
    log::debug!("GET {url}");

    let resp = client
        .execute(request)
        .map_err(|e| DegreeDayError::data_source_caused_by(format!("Failed to get {what}"), Some(&url), e))?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().unwrap_or_default();
        let snippet: String = body.chars().take(ERROR_BODY_LIMIT).collect();
        let message = if snippet.trim().is_empty() {
            format!("Failed to get {what}")
        } else {
            format!("Failed to get {what}: {}", snippet.trim())
        };
        return Err(DegreeDayError::http_status(message, status.as_u16(), &url));
    }

    resp.json::<T>()
        .map_err(|e| DegreeDayError::data_source_caused_by(format!("Failed to parse {what}"), Some(&url), e))
}
