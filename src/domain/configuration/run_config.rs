//! Run configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `pubset.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Remote API configuration.
    #[serde(default)]
    pub api: ApiConfig,
    /// Where credentials are read from.
    #[serde(default)]
    pub credentials: CredentialsConfig,
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.api.validate()?;
        self.credentials.validate()?;
        Ok(())
    }
}

/// Remote API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Host the configuration endpoints live under.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_secs: default_timeout() }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.base_url.cannot_be_a_base() {
            return Err(AppError::InvalidConfig(format!(
                "base_url must be a hierarchical URL: {}",
                self.base_url
            )));
        }
        Ok(())
    }
}

fn default_base_url() -> Url {
    Url::parse("https://cloud.skytap.com").expect("Default base URL must be valid")
}

fn default_timeout() -> u64 {
    30
}

/// Names of the environment variables holding API credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialsConfig {
    #[serde(default = "default_username_env")]
    pub username_env: String,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self { username_env: default_username_env(), api_key_env: default_api_key_env() }
    }
}

impl CredentialsConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.username_env.trim().is_empty() {
            return Err(AppError::InvalidConfig("username_env must not be empty".to_string()));
        }
        if self.api_key_env.trim().is_empty() {
            return Err(AppError::InvalidConfig("api_key_env must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_username_env() -> String {
    "SKYTAP_USERNAME".to_string()
}

fn default_api_key_env() -> String {
    "SKYTAP_API_KEY".to_string()
}
