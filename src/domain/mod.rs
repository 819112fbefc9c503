pub mod configuration;
pub mod credentials;
pub mod error;
pub mod identifier;
pub mod publish_set;
pub mod request;
pub mod runtime_context;
pub mod step;
pub mod step_parameters;

pub use configuration::{ApiConfig, CredentialsConfig, RunConfig};
pub use credentials::Credentials;
pub use error::AppError;
pub use identifier::parse_identifier_document;
pub use publish_set::{
    PublishSetRecord, PublishSetType, Rejection, ResolutionResult, check_for_api_error,
    parse_publish_sets, select,
};
pub use request::build_list_url;
pub use runtime_context::RuntimeContext;
pub use step::{StepFailure, StepStage};
pub use step_parameters::StepParameters;
