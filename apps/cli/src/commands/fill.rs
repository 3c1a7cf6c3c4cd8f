//! `contact fill`: interactive rendering loop over stdin

use std::io::Write;

use anyhow::Result;
use contact_form::{ContactForm, ContactSender, FieldKey, Notice, SubmitError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use super::{input_value, write_visible_errors};

const QUIT: &str = ":q";

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The message was delivered.
    Sent,
    /// The send operation failed.
    Failed,
    /// `:q` or end of input.
    Quit,
}

/// Prompts for every field, then re-prompts the ones still showing an error
/// until the form submits or the user quits.
pub async fn run<R, W>(input: R, out: &mut W, sender: &dyn ContactSender) -> Result<Outcome>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut form = ContactForm::new();
    let mut pending: Vec<FieldKey> = FieldKey::ALL.to_vec();

    writeln!(out, "Contact form ({QUIT} to quit)")?;
    loop {
        for key in pending {
            write!(out, "{key}: ")?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(out)?;
                return Ok(Outcome::Quit);
            };
            let value = line.trim_end_matches('\r');
            if value.trim() == QUIT {
                return Ok(Outcome::Quit);
            }

            form.set_value(key, input_value(key, value));
            form.mark_touched(key);
            if let Some(message) = form.visible_error(key) {
                writeln!(out, "  {message}")?;
            }
        }

        let outcome = form.submit(sender).await;
        if let Some(notice) = Notice::from_outcome(&outcome) {
            writeln!(out, "{notice}")?;
        }
        match outcome {
            Ok(()) => return Ok(Outcome::Sent),
            Err(SubmitError::Send(_)) => return Ok(Outcome::Failed),
            Err(SubmitError::Blocked(errors)) => {
                debug!(invalid = errors.len(), "re-prompting invalid fields");
                writeln!(out, "Please fix:")?;
                write_visible_errors(out, &form)?;
                pending = FieldKey::ALL
                    .into_iter()
                    .filter(|key| form.visible_error(*key).is_some())
                    .collect();
            }
            Err(err @ SubmitError::InFlight) => return Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contact_form::LogSender;

    async fn session(input: &str) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = run(input.as_bytes(), &mut out, &LogSender).await.unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn valid_answers_send_once() {
        let (outcome, out) = session("Al\nLi\nal@gmail.com\n1234567890\n").await;
        assert_eq!(outcome, Outcome::Sent);
        assert!(out.ends_with("Data sent successfully\n"));
    }

    #[tokio::test]
    async fn blocked_attempt_reprompts_only_invalid_fields() {
        let (outcome, out) = session("Al\nLi\nal@gmail.com\n123\n1234567890\n").await;
        assert_eq!(outcome, Outcome::Sent);
        assert!(out.contains("  Phone number must be exactly 10 digits\n"));
        assert!(out.contains("Please fix:\nPhone number: Phone number must be exactly 10 digits\n"));
        assert_eq!(out.matches("Phone number: ").count(), 3);
        assert_eq!(out.matches("First name: ").count(), 1);
    }

    #[tokio::test]
    async fn phone_answer_is_filtered_to_digits() {
        let (outcome, out) = session("Al\nLi\nal@gmail.com\n(123) 456-7890\n").await;
        assert_eq!(outcome, Outcome::Sent);
        assert!(!out.contains("exactly 10 digits"));
    }

    #[tokio::test]
    async fn quit_and_eof_stop_the_session() {
        assert_eq!(session("Al\n:q\n").await.0, Outcome::Quit);
        assert_eq!(session("Al\n").await.0, Outcome::Quit);
    }
}
