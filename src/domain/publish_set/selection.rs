use super::{PublishSetRecord, PublishSetType};
use crate::domain::AppError;

/// Why a matched publish set cannot yield a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// `multiple_url` sets expose one URL per VM.
    PerVmUrlsUnsupported,
    /// `single_url` set without a desktops URL.
    MissingDesktopsUrl,
}

/// Outcome of scanning publish sets for a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionResult {
    Found(String),
    NotFound,
    Rejected(Rejection),
}

impl ResolutionResult {
    /// Convert into the URL, or the error the step reports for this outcome.
    pub fn into_url(self, name: &str, configuration_id: &str) -> Result<String, AppError> {
        match self {
            ResolutionResult::Found(url) => Ok(url),
            ResolutionResult::NotFound => Err(AppError::PublishSetNotFound {
                name: name.to_string(),
                configuration_id: configuration_id.to_string(),
            }),
            ResolutionResult::Rejected(Rejection::PerVmUrlsUnsupported) => {
                Err(AppError::UnsupportedPublishSetType { name: name.to_string() })
            }
            ResolutionResult::Rejected(Rejection::MissingDesktopsUrl) => {
                Err(AppError::MissingDesktopsUrl { name: name.to_string() })
            }
        }
    }
}

/// Find the publish set named `target` and apply the type policy to it.
///
/// The first `single_url` or `multiple_url` record with an exact name match
/// decides the result. Matches of any other type are skipped.
pub fn select(records: &[PublishSetRecord], target: &str) -> ResolutionResult {
    tracing::info!("Scanning publish_sets ...");

    for record in records {
        tracing::info!("Publish Set Name: {}", record.name);
        if record.name != target {
            continue;
        }

        tracing::info!("Publish Set Name matched: {}", record.name);
        match record.publish_set_type {
            PublishSetType::MultipleUrl => {
                return ResolutionResult::Rejected(Rejection::PerVmUrlsUnsupported);
            }
            PublishSetType::SingleUrl => {
                return match record.desktops_url.as_deref().filter(|url| !url.is_empty()) {
                    Some(url) => ResolutionResult::Found(url.to_string()),
                    None => ResolutionResult::Rejected(Rejection::MissingDesktopsUrl),
                };
            }
            PublishSetType::Other(ref kind) => {
                tracing::debug!(publish_set_type = %kind, "skipping publish set of unhandled type");
            }
        }
    }

    tracing::info!("No publish_sets matched user provided name: {}", target);
    ResolutionResult::NotFound
}
