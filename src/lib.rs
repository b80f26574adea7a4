pub mod app;
pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use app::console::OutputFormat;
pub use app::labels::Locale;
pub use config::Settings;
pub use crate::core::checksum::{
    ccp_key, compute, format_identifier, rip_key, AccountNumber, CheckKey, Computation,
};
pub use utils::error::{KeyError, Result};
