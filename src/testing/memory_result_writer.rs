use crate::domain::AppError;
use crate::ports::ResultWriter;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MemoryResultWriter {
    pub written: Arc<Mutex<Vec<(PathBuf, String)>>>,
    fail: bool,
}

impl MemoryResultWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn writes(&self) -> Vec<(PathBuf, String)> {
        self.written.lock().unwrap().clone()
    }
}

impl ResultWriter for MemoryResultWriter {
    fn write(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::Write {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only filesystem"),
            });
        }
        self.written.lock().unwrap().push((path.to_path_buf(), content.to_string()));
        Ok(())
    }
}
