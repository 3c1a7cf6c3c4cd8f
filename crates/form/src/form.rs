//! Contact form composition and the submit flow
//!
//! ```text
//! Pristine --edit--> Editing --submit (invalid)--> EditingWithAttempt
//!    ^                  ^                               |
//!    |                  +-------- fields corrected -----+
//!    |                                                  |
//!    +---- finish_submit <-- Submitting <--submit (valid)+
//! ```
//!
//! Submitting is split in two so an event loop can keep handling input
//! while the send operation is pending: [`ContactForm::begin_submit`]
//! validates, snapshots and clears the form, and
//! [`ContactForm::finish_submit`] records the outcome. A second
//! `begin_submit` in between is rejected with [`SubmitError::InFlight`].

use contact_validator::prelude::*;
use tracing::{debug, info, warn};

use crate::error::{SendError, SubmitError};
use crate::fields::FieldKey;
use crate::payload::ContactPayload;
use crate::sender::ContactSender;

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormPhase {
    /// Nothing entered or touched.
    Pristine,
    /// At least one field was edited or touched.
    Editing,
    /// A submit was attempted while invalid; all errors are revealed.
    EditingWithAttempt,
    /// A valid submission is waiting on the send operation.
    Submitting,
}

/// The four-field contact form.
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: [FieldController; 4],
    submit_attempted: bool,
    submitting: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    /// Creates a pristine form with the standard rules.
    pub fn new() -> Self {
        Self::with_rules(FieldKey::rules)
    }

    /// Creates a pristine form with custom rules per field.
    pub fn with_rules(mut rules: impl FnMut(FieldKey) -> RuleSet) -> Self {
        let field = |key: FieldKey, rules: RuleSet| FieldController::named(key.name(), rules);
        Self {
            fields: [
                field(FieldKey::FirstName, rules(FieldKey::FirstName)),
                field(FieldKey::LastName, rules(FieldKey::LastName)),
                field(FieldKey::Phone, rules(FieldKey::Phone)),
                field(FieldKey::Email, rules(FieldKey::Email)),
            ],
            submit_attempted: false,
            submitting: false,
        }
    }

    // ------------------------------------------------------------------------
    // Field access
    // ------------------------------------------------------------------------

    /// Borrows one field.
    pub fn field(&self, key: FieldKey) -> &FieldController {
        &self.fields[key.index()]
    }

    /// Mutably borrows one field.
    pub fn field_mut(&mut self, key: FieldKey) -> &mut FieldController {
        &mut self.fields[key.index()]
    }

    /// All fields in render order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldKey, &FieldController)> {
        FieldKey::ALL.into_iter().map(|key| (key, self.field(key)))
    }

    /// The input changed.
    pub fn set_value(&mut self, key: FieldKey, value: impl Into<String>) {
        self.field_mut(key).set_value(value);
    }

    /// The input lost focus.
    pub fn mark_touched(&mut self, key: FieldKey) {
        self.field_mut(key).mark_touched();
    }

    // ------------------------------------------------------------------------
    // Derived state
    // ------------------------------------------------------------------------

    /// Every field is valid.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(FieldController::is_valid)
    }

    /// A submit was attempted since the last successful one.
    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    /// A submission is waiting on the send operation.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    fn reveal_all(&self) -> bool {
        self.submit_attempted && !self.is_valid()
    }

    /// Whether the error slot for `key` is rendered:
    /// `has_visible_error || (!form_is_valid && submit_attempted)`.
    ///
    /// For a valid field this can be true with an empty message; use
    /// [`ContactForm::visible_error`] to get only non-empty text.
    pub fn is_error_shown(&self, key: FieldKey) -> bool {
        self.field(key).has_visible_error() || self.reveal_all()
    }

    /// The error text to render for `key`, if any.
    pub fn visible_error(&self, key: FieldKey) -> Option<&str> {
        self.field(key).show_error(self.reveal_all())
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> FormPhase {
        if self.submitting {
            FormPhase::Submitting
        } else if self.reveal_all() {
            FormPhase::EditingWithAttempt
        } else if self
            .fields
            .iter()
            .any(|field| field.is_dirty() || field.is_touched())
        {
            FormPhase::Editing
        } else {
            FormPhase::Pristine
        }
    }

    /// A `rule_failed` error for every currently invalid field, in render order.
    pub fn errors(&self) -> ValidationErrors {
        self.fields()
            .filter_map(|(_, field)| field.to_error())
            .collect()
    }

    /// The current values.
    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            first_name: self.field(FieldKey::FirstName).value().to_owned(),
            last_name: self.field(FieldKey::LastName).value().to_owned(),
            phone: self.field(FieldKey::Phone).value().to_owned(),
            email: self.field(FieldKey::Email).value().to_owned(),
        }
    }

    // ------------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------------

    /// Handles a submit action.
    ///
    /// Marks the attempt, then refuses if a submission is pending or any
    /// field is invalid. Otherwise snapshots the values, resets every field,
    /// clears the attempt flag and enters [`FormPhase::Submitting`].
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitError> {
        self.submit_attempted = true;
        if self.submitting {
            warn!("submit ignored: previous submission still in flight");
            return Err(SubmitError::InFlight);
        }

        if !self.is_valid() {
            let errors = self.errors();
            debug!(invalid_fields = errors.len(), "submit blocked");
            return Err(SubmitError::Blocked(errors));
        }

        let payload = self.payload();
        for field in &mut self.fields {
            field.reset();
        }
        self.submit_attempted = false;
        self.submitting = true;
        info!("contact form submitted");

        Ok(Submission { payload })
    }

    /// Records the send outcome and leaves [`FormPhase::Submitting`].
    pub fn finish_submit(&mut self, result: Result<(), SendError>) -> Result<(), SubmitError> {
        self.submitting = false;
        match &result {
            Ok(()) => info!("contact message sent"),
            Err(error) => warn!(%error, "contact message was not sent"),
        }
        result.map_err(SubmitError::from)
    }

    /// Full submit: [`begin_submit`](Self::begin_submit), send, then
    /// [`finish_submit`](Self::finish_submit).
    pub async fn submit<S>(&mut self, sender: &S) -> Result<(), SubmitError>
    where
        S: ContactSender + ?Sized,
    {
        let submission = self.begin_submit()?;
        let result = submission.send(sender).await;
        self.finish_submit(result)
    }

    /// Clears every field and both flags.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
        self.submit_attempted = false;
        self.submitting = false;
    }
}

/// A validated snapshot waiting to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a begun submission must be sent and finished"]
pub struct Submission {
    payload: ContactPayload,
}

impl Submission {
    /// The values being sent.
    pub fn payload(&self) -> &ContactPayload {
        &self.payload
    }

    /// Takes the values.
    pub fn into_payload(self) -> ContactPayload {
        self.payload
    }

    /// Hands the payload to `sender`.
    pub async fn send<S>(&self, sender: &S) -> Result<(), SendError>
    where
        S: ContactSender + ?Sized,
    {
        sender.send(&self.payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{GMAIL_FORMAT, MIN_TWO_CHARS, ONLY_LETTERS};
    use pretty_assertions::assert_eq;

    fn fill_valid(form: &mut ContactForm) {
        form.set_value(FieldKey::FirstName, "Al");
        form.set_value(FieldKey::LastName, "Li");
        form.set_value(FieldKey::Phone, "1234567890");
        form.set_value(FieldKey::Email, "al@gmail.com");
    }

    #[test]
    fn new_form_is_pristine_and_invalid() {
        let form = ContactForm::new();
        assert_eq!(form.phase(), FormPhase::Pristine);
        assert!(!form.is_valid());
        for key in FieldKey::ALL {
            assert!(!form.is_error_shown(key));
            assert_eq!(form.visible_error(key), None);
        }
    }

    #[test]
    fn editing_reveals_only_touched_fields() {
        let mut form = ContactForm::new();
        form.set_value(FieldKey::FirstName, "A1");
        form.set_value(FieldKey::LastName, "L");
        form.mark_touched(FieldKey::LastName);

        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.visible_error(FieldKey::FirstName), None);
        assert_eq!(form.visible_error(FieldKey::LastName), Some(MIN_TWO_CHARS));
    }

    #[test]
    fn blocked_submit_reveals_every_invalid_field() {
        let mut form = ContactForm::new();
        form.set_value(FieldKey::FirstName, "A1");
        form.set_value(FieldKey::LastName, "Li");
        form.set_value(FieldKey::Phone, "1234567890");
        form.set_value(FieldKey::Email, "al@yahoo.com");

        let err = form.begin_submit().unwrap_err();
        let errors = err.blocked_errors().unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.errors()[0].field.as_deref(), Some("first_name"));
        assert_eq!(errors.errors()[1].field.as_deref(), Some("email"));

        assert_eq!(form.phase(), FormPhase::EditingWithAttempt);
        assert_eq!(form.visible_error(FieldKey::FirstName), Some(ONLY_LETTERS));
        assert_eq!(form.visible_error(FieldKey::Email), Some(GMAIL_FORMAT));
        // A valid field has its slot shown but nothing to say.
        assert!(form.is_error_shown(FieldKey::Phone));
        assert_eq!(form.visible_error(FieldKey::Phone), None);
        // Nothing was reset.
        assert_eq!(form.field(FieldKey::FirstName).value(), "A1");
    }

    #[test]
    fn correcting_fields_hides_forced_errors() {
        let mut form = ContactForm::new();
        form.set_value(FieldKey::FirstName, "A1");
        assert!(form.begin_submit().is_err());
        fill_valid(&mut form);

        assert!(form.is_valid());
        assert_eq!(form.phase(), FormPhase::Editing);
        for key in FieldKey::ALL {
            assert!(!form.is_error_shown(key));
        }
    }

    #[test]
    fn valid_submit_snapshots_and_resets() {
        let mut form = ContactForm::new();
        fill_valid(&mut form);
        form.mark_touched(FieldKey::Email);

        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.payload().first_name, "Al");
        assert_eq!(submission.payload().email, "al@gmail.com");

        assert_eq!(form.phase(), FormPhase::Submitting);
        assert!(!form.submit_attempted());
        for (_, field) in form.fields() {
            assert_eq!(field.value(), "");
            assert!(!field.is_touched());
        }
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let mut form = ContactForm::new();
        fill_valid(&mut form);
        let _pending = form.begin_submit().unwrap();

        fill_valid(&mut form);
        assert!(matches!(form.begin_submit(), Err(SubmitError::InFlight)));

        assert!(form.finish_submit(Ok(())).is_ok());
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn submit_while_in_flight_still_reveals_edited_errors() {
        let mut form = ContactForm::new();
        fill_valid(&mut form);
        let _pending = form.begin_submit().unwrap();

        form.set_value(FieldKey::Phone, "123");
        assert!(matches!(form.begin_submit(), Err(SubmitError::InFlight)));
        assert!(form.submit_attempted());
        assert_eq!(
            form.visible_error(FieldKey::Phone),
            Some("Phone number must be exactly 10 digits")
        );

        assert!(form.finish_submit(Ok(())).is_ok());
        assert_eq!(form.phase(), FormPhase::EditingWithAttempt);
    }

    #[test]
    fn phase_follows_validity_after_blocked_attempt() {
        let mut form = ContactForm::new();
        form.set_value(FieldKey::FirstName, "A1");
        assert!(form.begin_submit().is_err());
        assert_eq!(form.phase(), FormPhase::EditingWithAttempt);

        fill_valid(&mut form);
        assert_eq!(form.phase(), FormPhase::Editing);

        form.set_value(FieldKey::LastName, "L");
        assert_eq!(form.phase(), FormPhase::EditingWithAttempt);
    }

    #[test]
    fn finish_submit_surfaces_send_failure() {
        let mut form = ContactForm::new();
        fill_valid(&mut form);
        let _pending = form.begin_submit().unwrap();

        let result = form.finish_submit(Err(SendError::Config("no service".into())));
        assert!(matches!(result, Err(SubmitError::Send(SendError::Config(_)))));
        assert_eq!(form.phase(), FormPhase::Pristine);
    }

    #[test]
    fn reset_returns_to_pristine() {
        let mut form = ContactForm::new();
        form.set_value(FieldKey::Phone, "123");
        assert!(form.begin_submit().is_err());
        form.reset();
        assert_eq!(form.phase(), FormPhase::Pristine);
        assert_eq!(form.payload(), ContactPayload::default());
    }

    #[test]
    fn custom_rules_replace_defaults() {
        let mut form = ContactForm::with_rules(|_| RuleSet::empty());
        assert!(form.is_valid());
        assert!(form.begin_submit().is_ok());
    }
}
