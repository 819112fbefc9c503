pub mod env_build_context;
pub mod file_result_writer;
pub mod http_configuration_client;

pub use env_build_context::EnvBuildContext;
pub use file_result_writer::FileResultWriter;
pub use http_configuration_client::HttpConfigurationClient;
