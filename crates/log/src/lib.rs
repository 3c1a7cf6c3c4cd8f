//! # contact-log
//!
//! Logging setup shared by the contact form crates and the `contact` binary.
//!
//! ```rust,no_run
//! use contact_log::{Config, Format};
//!
//! fn main() -> contact_log::LogResult<()> {
//!     let _guard = contact_log::init_with(Config {
//!         format: Format::Json,
//!         ..Config::from_env()
//!     })?;
//!
//!     tracing::info!(field = "email", "validated");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format};
pub use error::{LogError, LogResult};

/// Initialize with the default configuration
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with a custom configuration
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
