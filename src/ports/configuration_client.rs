//! Configuration API client port definition.

use crate::domain::{AppError, Credentials};

/// Port for reading configurations from the remote API.
pub trait ConfigurationClient {
    /// Issue a GET for `request_url` and return the raw response body.
    ///
    /// Transport failures map to `AppError::Transport`, non-success statuses
    /// to `AppError::Api`.
    fn get_configuration(
        &self,
        request_url: &str,
        credentials: &Credentials,
    ) -> Result<String, AppError>;
}
