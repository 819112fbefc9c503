//! Publish sets of a configuration: decoding and URL selection.

mod record;
mod response;
mod selection;

pub use record::{PublishSetRecord, PublishSetType};
pub use response::{check_for_api_error, parse_publish_sets};
pub use selection::{Rejection, ResolutionResult, select};
