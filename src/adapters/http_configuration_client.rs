//! Configuration API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::domain::{ApiConfig, AppError, Credentials};
use crate::ports::ConfigurationClient;

const JSON_MEDIA_TYPE: &str = "application/json";
const DEFAULT_STATUS_MESSAGE: &str = "Configuration API request failed";

/// HTTP transport for the configuration API.
///
/// One request per call, no retries.
#[derive(Clone)]
pub struct HttpConfigurationClient {
    client: Client,
}

impl std::fmt::Debug for HttpConfigurationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpConfigurationClient").finish_non_exhaustive()
    }
}

impl HttpConfigurationClient {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl ConfigurationClient for HttpConfigurationClient {
    fn get_configuration(
        &self,
        request_url: &str,
        credentials: &Credentials,
    ) -> Result<String, AppError> {
        let response = self
            .client
            .get(request_url)
            .basic_auth(credentials.username(), Some(credentials.api_key()))
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .header(CONTENT_TYPE, JSON_MEDIA_TYPE)
            .send()
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = response.status();
        let body_text = response
            .text()
            .map_err(|e| AppError::Transport(format!("Failed to read response body: {}", e)))?;

        if status.is_success() {
            return Ok(body_text);
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 401 {
                "Unauthorized".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::Api { message, status: Some(status.as_u16()) })
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed.get("error").and_then(|error| error.as_str()) {
        return Some(msg.to_string());
    }

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}
