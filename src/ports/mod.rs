mod build_context;
mod configuration_client;
mod result_writer;

pub use build_context::BuildContext;
pub use configuration_client::ConfigurationClient;
pub use result_writer::ResultWriter;
