//! Subcommand implementations

pub mod check;
pub mod fill;
pub mod submit;

use std::io::Write;

use anyhow::{Context, Result};
use contact_form::{ContactForm, ContactSender, EmailJsSender, FieldKey, LogSender};
use tracing::info;

use crate::config::AppConfig;

/// The real sender, or [`LogSender`] for dry runs.
pub fn sender(config: &AppConfig) -> Result<Box<dyn ContactSender>> {
    if config.dry_run {
        info!("dry run: messages are logged, not sent");
        return Ok(Box::new(LogSender));
    }
    let emailjs = config.emailjs()?;
    let sender = EmailJsSender::new(emailjs.clone()).context("cannot build EmailJS sender")?;
    info!(endpoint = %sender.endpoint(), "sending through EmailJS");
    Ok(Box::new(sender))
}

/// What the input widget for `key` would hold after typing `raw`.
///
/// The phone input is numeric: anything but ASCII digits is dropped.
pub(crate) fn input_value(key: FieldKey, raw: &str) -> String {
    match key {
        FieldKey::Phone => raw.chars().filter(char::is_ascii_digit).collect(),
        _ => raw.to_owned(),
    }
}

/// Writes every field's visible error, one per line.
pub(crate) fn write_visible_errors(out: &mut impl Write, form: &ContactForm) -> Result<()> {
    for key in FieldKey::ALL {
        if let Some(message) = form.visible_error(key) {
            writeln!(out, "{key}: {message}")?;
        }
    }
    Ok(())
}
