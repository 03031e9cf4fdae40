pub mod config;
pub mod core;
pub mod days;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{local_input::LocalInput, toml_config::TomlConfig};
pub use crate::core::{report, runner::Runner};
pub use domain::model::{Day, Part, ReportFormat, RunSummary};
pub use utils::error::{AocError, Result};
