mod fake_configuration_client;
mod memory_result_writer;

pub use fake_configuration_client::FakeConfigurationClient;
pub use memory_result_writer::MemoryResultWriter;
