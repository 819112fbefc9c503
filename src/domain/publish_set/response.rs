use serde::Deserialize;
use serde_json::Value;

use super::{PublishSetRecord, PublishSetType};
use crate::domain::AppError;

const PUBLISH_SETS_KEY: &str = "publish_sets";

#[derive(Debug, Deserialize)]
struct ConfigurationDocument {
    publish_sets: Vec<RawPublishSet>,
}

#[derive(Debug, Deserialize)]
struct RawPublishSet {
    name: String,
    publish_set_type: String,
    #[serde(default)]
    desktops_url: Option<String>,
}

/// Fail when a successful response body still reports an API error.
///
/// Bodies that are not JSON objects are left to `parse_publish_sets`.
pub fn check_for_api_error(body: &str) -> Result<(), AppError> {
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
        return Ok(());
    };

    let flagged = map.get("error").filter(|error| !error.is_null() && error.as_bool() != Some(false));
    if let Some(error) = flagged {
        let message = error
            .as_str()
            .map(ToOwned::to_owned)
            .or_else(|| error.get("message").and_then(Value::as_str).map(ToOwned::to_owned))
            .unwrap_or_else(|| error.to_string());
        return Err(AppError::Api { message, status: None });
    }

    if let Some(errors) = map.get("errors").and_then(Value::as_array).filter(|e| !e.is_empty()) {
        let message = errors
            .iter()
            .map(|entry| entry.as_str().map(ToOwned::to_owned).unwrap_or_else(|| entry.to_string()))
            .collect::<Vec<_>>()
            .join("; ");
        return Err(AppError::Api { message, status: None });
    }

    Ok(())
}

/// Decode the `publish_sets` array of a configuration response.
pub fn parse_publish_sets(body: &str) -> Result<Vec<PublishSetRecord>, AppError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| AppError::malformed(format!("body is not valid JSON: {}", e)))?;

    if !value.is_object() {
        return Err(AppError::malformed("expected a JSON object"));
    }
    if value.get(PUBLISH_SETS_KEY).is_none() {
        return Err(AppError::malformed(format!("missing \"{}\" key", PUBLISH_SETS_KEY)));
    }

    let document: ConfigurationDocument = serde_json::from_value(value)
        .map_err(|e| AppError::malformed(format!("unexpected publish set shape: {}", e)))?;

    Ok(document
        .publish_sets
        .into_iter()
        .map(|raw| {
            PublishSetRecord::new(
                raw.name,
                PublishSetType::parse(&raw.publish_set_type),
                raw.desktops_url,
            )
        })
        .collect())
}
