//! pubset: resolve the URL of a configuration's named publish set and save it
//! for later build steps.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    InvocationOptions, ListPublishedUrlOutcome, list_published_url, run_list_published_url,
};
pub use app::commands::list_published_url::ListPublishedUrlStep;
pub use app::{AppContext, Step, run_step};
pub use domain::{AppError, StepFailure, StepParameters, StepStage};
