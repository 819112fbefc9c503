//! Identifier documents: JSON files whose top-level object carries an `id`.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::AppError;

#[derive(Debug, Deserialize)]
struct IdentifierDocument {
    id: RawId,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

/// Extract the runtime id from the contents of an identifier file.
///
/// `source_path` is only used to label errors.
pub fn parse_identifier_document(content: &str, source_path: &str) -> Result<String, AppError> {
    let failure = |reason: String| AppError::IdentifierResolution {
        source_path: source_path.to_string(),
        reason,
    };

    let value: Value =
        serde_json::from_str(content).map_err(|e| failure(format!("invalid JSON: {}", e)))?;

    if !value.is_object() {
        return Err(failure("expected a JSON object".into()));
    }
    if value.get("id").is_none() {
        return Err(failure("no \"id\" field".into()));
    }

    let document: IdentifierDocument = serde_json::from_value(value)
        .map_err(|_| failure("\"id\" must be a string or a number".into()))?;

    let id = match document.id {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    };

    if id.is_empty() {
        return Err(failure("\"id\" is empty".into()));
    }

    Ok(id)
}
