//! Error handling for contact-log

use thiserror::Error;

/// Result alias for logger setup.
pub type LogResult<T> = Result<T, LogError>;

/// Logger setup failed.
#[derive(Debug, Error)]
pub enum LogError {
    /// The level directive string could not be parsed.
    #[error("invalid filter '{filter}': {reason}")]
    Filter {
        /// Directive string as given.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,

    /// A setting had an unrecognised value.
    #[error("configuration error: {0}")]
    Config(String),
}
