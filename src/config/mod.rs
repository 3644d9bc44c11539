//! Configuration for the company and snapshot output.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CompanyConfig, Config, OutputConfig, OutputFormat};
