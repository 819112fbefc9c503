use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for pubset operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure outside of the result write.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Step parameters are missing or conflicting.
    #[error("{0}")]
    Precondition(String),

    /// Runtime configuration id could not be derived.
    #[error("Error obtaining runtime configuration id from {source_path}: {reason}")]
    IdentifierResolution { source_path: String, reason: String },

    /// Request never produced a response.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The API reported an error, either through the status or the body.
    #[error("{message}")]
    Api { message: String, status: Option<u16> },

    /// Response body does not have the expected shape.
    #[error("Malformed configuration response: {0}")]
    MalformedResponse(String),

    /// The matched publish set exposes one URL per VM.
    #[error("Publish set '{name}' is multiple_url. URLs for individual VMs are not supported.")]
    UnsupportedPublishSetType { name: String },

    /// The matched single_url publish set carries no desktops URL.
    #[error("Publish set '{name}' does not carry a desktops_url")]
    MissingDesktopsUrl { name: String },

    /// No publish set with the requested name.
    #[error(
        "URL Name: {name} could not be found in publish_sets for configuration {configuration_id}"
    )]
    PublishSetNotFound { name: String, configuration_id: String },

    /// Saving the resolved URL failed.
    #[error("Failed to save url to file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Run configuration holds an invalid value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Run configuration file missing at an explicit path.
    #[error("Config file not found: {0}")]
    ConfigMissing(String),

    /// Required environment variable missing or empty.
    #[error("Environment variable {0} is not set")]
    EnvironmentVariableMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn precondition<S: Into<String>>(message: S) -> Self {
        AppError::Precondition(message.into())
    }

    pub fn malformed<S: Into<String>>(message: S) -> Self {
        AppError::MalformedResponse(message.into())
    }
}
