pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
mod context;
pub mod logging;
pub mod step;

pub use context::AppContext;
pub use step::{Step, run_step};
