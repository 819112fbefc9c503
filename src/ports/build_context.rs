use std::path::PathBuf;

use crate::domain::{AppError, Credentials};

/// Services the invoking build provides to a step.
pub trait BuildContext {
    /// Expand environment variable references in a user-provided value.
    fn expand_env_vars(&self, value: &str) -> String;

    /// Turn a user-provided file name into an absolute path inside the workspace.
    fn to_workspace_path(&self, value: &str) -> PathBuf;

    /// Credentials for the remote API.
    fn auth_credentials(&self) -> Result<Credentials, AppError>;
}
