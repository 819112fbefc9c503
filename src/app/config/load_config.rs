use std::fs;
use std::path::Path;

use crate::domain::configuration::parse_config_content;
use crate::domain::{AppError, RunConfig};

/// Config file looked up in the workspace when no explicit path is given.
pub const CONFIG_FILE: &str = "pubset.toml";

/// Load the run configuration.
///
/// An explicit path must exist. Without one, `<workspace>/pubset.toml` is used
/// when present and the defaults otherwise.
pub fn load_config(workspace: &Path, explicit: Option<&Path>) -> Result<RunConfig, AppError> {
    let path = match explicit {
        Some(path) if !path.exists() => {
            return Err(AppError::ConfigMissing(path.display().to_string()));
        }
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = workspace.join(CONFIG_FILE);
            if !candidate.exists() {
                return Ok(RunConfig::default());
            }
            candidate
        }
    };

    tracing::debug!(path = %path.display(), "loading run configuration");
    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}
