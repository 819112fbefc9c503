use std::path::Path;

use crate::domain::AppError;

/// Port for persisting a resolved URL.
pub trait ResultWriter {
    /// Replace the contents of `path` with exactly `content`.
    fn write(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
