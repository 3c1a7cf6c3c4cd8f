//! `contact submit --first-name .. --dry-run`

use std::io::Write;

use anyhow::Result;
use contact_form::{ContactForm, ContactSender, Notice, SubmitError};

use super::{input_value, write_visible_errors};
use crate::cli::SubmitArgs;

/// One-shot submit. Returns whether the message was sent.
pub async fn run(
    out: &mut impl Write,
    args: &SubmitArgs,
    sender: &dyn ContactSender,
) -> Result<bool> {
    let mut form = ContactForm::new();
    for (key, value) in args.values() {
        form.set_value(key, input_value(key, value));
        form.mark_touched(key);
    }

    let outcome = form.submit(sender).await;
    if let Err(SubmitError::Blocked(_)) = &outcome {
        write_visible_errors(out, &form)?;
    }
    if let Some(notice) = Notice::from_outcome(&outcome) {
        writeln!(out, "{notice}")?;
    }
    Ok(outcome.is_ok())
}
