pub mod loader;
pub mod run_config;

pub use loader::parse_config_content;
pub use run_config::{ApiConfig, CredentialsConfig, RunConfig};
