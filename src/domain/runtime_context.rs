use std::path::{Path, PathBuf};

use crate::domain::Credentials;

/// Per-invocation state derived from the step parameters and the build context.
///
/// Built at the start of an execution and dropped at its end; never stored on
/// the step itself.
#[derive(Debug, Clone)]
pub struct RuntimeContext {
    pub configuration_id: String,
    pub credentials: Credentials,
    pub configuration_file: Option<PathBuf>,
    pub url_file: PathBuf,
}

impl RuntimeContext {
    pub fn configuration_file(&self) -> Option<&Path> {
        self.configuration_file.as_deref()
    }

    pub fn url_file(&self) -> &Path {
        &self.url_file
    }
}
