//! The send operation
//!
//! Implement [`ContactSender`] to deliver a submitted form. Two senders are
//! provided:
//! - [`EmailJsSender`]: posts the payload to the EmailJS REST API.
//! - [`LogSender`]: logs the payload and reports success (dry run).

mod emailjs;

pub use emailjs::{EmailJsConfig, EmailJsSender};

use async_trait::async_trait;
use tracing::info;

use crate::error::SendError;
use crate::payload::ContactPayload;

/// Delivers a submitted contact form.
///
/// Called once per successful submit. No retry is attempted by the form;
/// a failure is reported to the user and the form stays usable.
#[async_trait]
pub trait ContactSender: Send + Sync {
    /// Sends the payload.
    async fn send(&self, payload: &ContactPayload) -> Result<(), SendError>;
}

#[async_trait]
impl<S: ContactSender + ?Sized> ContactSender for Box<S> {
    async fn send(&self, payload: &ContactPayload) -> Result<(), SendError> {
        (**self).send(payload).await
    }
}

/// Logs the payload at `info` and succeeds without contacting anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSender;

#[async_trait]
impl ContactSender for LogSender {
    async fn send(&self, payload: &ContactPayload) -> Result<(), SendError> {
        info!(
            first_name = %payload.first_name,
            last_name = %payload.last_name,
            phone = %payload.phone,
            email = %payload.email,
            "dry run: contact message not sent"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn log_sender_always_succeeds() {
        let sender: Box<dyn ContactSender> = Box::new(LogSender);
        assert!(sender.send(&ContactPayload::default()).await.is_ok());
    }
}
