use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::ResultWriter;

/// Writes results straight to the local filesystem.
///
/// The file is created or truncated; parent directories are not created.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileResultWriter;

impl FileResultWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ResultWriter for FileResultWriter {
    fn write(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let to_write_error = |source| AppError::Write { path: path.to_path_buf(), source };

        // The handle is closed when `file` drops, on success and on error alike.
        let mut file = File::create(path).map_err(to_write_error)?;
        file.write_all(content.as_bytes()).map_err(to_write_error)?;
        file.sync_all().map_err(to_write_error)
    }
}
