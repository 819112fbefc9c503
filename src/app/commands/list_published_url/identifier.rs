use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::{AppError, parse_identifier_document};

/// Produce the configuration id the step operates on.
///
/// A literal id wins; otherwise the id is read from the identifier file.
pub fn resolve_runtime_id(
    id_literal: Option<&str>,
    file: Option<&Path>,
) -> Result<String, AppError> {
    if let Some(id) = id_literal {
        return Ok(id.to_string());
    }

    let Some(path) = file else {
        return Err(AppError::IdentifierResolution {
            source_path: "<none>".to_string(),
            reason: "neither a configuration ID nor a configuration file was provided".to_string(),
        });
    };

    let source_path = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| AppError::IdentifierResolution {
        source_path: source_path.clone(),
        reason: match e.kind() {
            ErrorKind::NotFound => "file not found".to_string(),
            _ => e.to_string(),
        },
    })?;

    parse_identifier_document(&content, &source_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn literal_id_ignores_file() {
        let id = resolve_runtime_id(Some("123"), Some(Path::new("/does/not/exist.json")));
        assert_eq!(id.unwrap(), "123");
    }

    #[test]
    fn reads_id_from_file_repeatably() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("configuration.json");
        fs::write(&path, r#"{"id": "1453536", "runstate": "running"}"#).unwrap();

        let first = resolve_runtime_id(None, Some(&path)).unwrap();
        let second = resolve_runtime_id(None, Some(&path)).unwrap();

        assert_eq!(first, "1453536");
        assert_eq!(first, second);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");

        let err = resolve_runtime_id(None, Some(&path)).unwrap_err();

        match err {
            AppError::IdentifierResolution { reason, .. } => assert_eq!(reason, "file not found"),
            other => panic!("unexpected error variant: {}", other),
        }
    }

    #[test]
    fn no_source_is_reported() {
        assert!(resolve_runtime_id(None, None).is_err());
    }
}
