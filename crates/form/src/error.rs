//! Error types for submission and delivery

use contact_validator::foundation::ValidationErrors;
use thiserror::Error;

/// A submit action did not reach (or did not get through) the send operation.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// At least one field is invalid. Every field's error is now visible.
    #[error("submission blocked: {0}")]
    Blocked(ValidationErrors),

    /// A previous submission has not finished yet.
    #[error("a submission is already in flight")]
    InFlight,

    /// The send operation failed.
    #[error(transparent)]
    Send(#[from] SendError),
}

impl SubmitError {
    /// Field failures behind a blocked submission.
    pub fn blocked_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Blocked(errors) => Some(errors),
            _ => None,
        }
    }
}

/// The email service could not deliver the message.
#[derive(Debug, Error)]
pub enum SendError {
    /// Network or client failure before a response arrived.
    #[error("email transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("email service rejected the message with status {status}: {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// The sender is not configured correctly.
    #[error("email sender misconfigured: {0}")]
    Config(String),
}

/// A string did not name any contact form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field `{0}` (expected first_name, last_name, phone or email)")]
pub struct UnknownField(pub String);
