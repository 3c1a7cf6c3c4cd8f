//! Field controller: one input's value and touched state
//!
//! Validity is never stored. Every read evaluates the bound [`RuleSet`]
//! against the current value, so it cannot go stale after [`FieldController::set_value`].

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::foundation::ValidationError;
use crate::rule::{Evaluation, RuleEvaluationError, RuleSet};

/// Raw state of one field.
///
/// Starts as `{ value: "", touched: false }`. `touched` only goes back to
/// `false` through [`FieldController::reset`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldState {
    /// Current input value.
    pub value: String,
    /// The field has been blurred (or explicitly marked) at least once.
    pub touched: bool,
}

/// Owns one field's [`FieldState`] and derives validity from its [`RuleSet`].
///
/// ```rust
/// use contact_validator::prelude::*;
///
/// let rules = RuleSet::builder()
///     .validator("Phone number must be exactly 10 digits", exact_length(10))
///     .build();
/// let mut phone = FieldController::named("phone", rules);
///
/// phone.set_value("12345");
/// assert_eq!(phone.error_message(), "Phone number must be exactly 10 digits");
/// assert_eq!(phone.show_error(false), None);
/// assert_eq!(phone.show_error(true), Some("Phone number must be exactly 10 digits"));
///
/// phone.set_value("1234567890");
/// assert!(phone.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct FieldController {
    name: Cow<'static, str>,
    state: FieldState,
    rules: RuleSet,
}

impl FieldController {
    /// Creates an unnamed controller with an empty, untouched value.
    pub fn new(rules: RuleSet) -> Self {
        Self::named("", rules)
    }

    /// Creates a named controller. The name is attached to errors and log events.
    pub fn named(name: impl Into<Cow<'static, str>>, rules: RuleSet) -> Self {
        Self {
            name: name.into(),
            state: FieldState::default(),
            rules,
        }
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------

    /// Replaces the value. Leaves `touched` alone.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.state.value = value.into();
        trace!(field = %self.name, len = self.state.value.len(), "field value changed");
    }

    /// Marks the field as touched. Idempotent.
    pub fn mark_touched(&mut self) {
        if !self.state.touched {
            self.state.touched = true;
            trace!(field = %self.name, "field touched");
        }
    }

    /// The input lost focus. Same as [`FieldController::mark_touched`].
    pub fn mark_blurred(&mut self) {
        self.mark_touched();
    }

    /// Returns the field to `{ value: "", touched: false }`.
    pub fn reset(&mut self) {
        self.state = FieldState::default();
        trace!(field = %self.name, "field reset");
    }

    // ------------------------------------------------------------------------
    // Raw state
    // ------------------------------------------------------------------------

    /// Field name, `""` when unnamed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value.
    pub fn value(&self) -> &str {
        &self.state.value
    }

    /// Whether the field has been touched.
    pub fn is_touched(&self) -> bool {
        self.state.touched
    }

    /// Whether the value differs from the initial empty value.
    pub fn is_dirty(&self) -> bool {
        !self.state.value.is_empty()
    }

    /// Borrows the raw state.
    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// Copies the raw state.
    pub fn snapshot(&self) -> FieldState {
        self.state.clone()
    }

    /// The rules bound to this field.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    // ------------------------------------------------------------------------
    // Derived state
    // ------------------------------------------------------------------------

    /// Evaluates the rules against the current value.
    pub fn validity(&self) -> Evaluation<'_> {
        self.rules.evaluate(&self.state.value)
    }

    /// Like [`FieldController::validity`], capturing a panicking predicate.
    pub fn try_validity(&self) -> Result<Evaluation<'_>, RuleEvaluationError> {
        self.rules.try_evaluate(&self.state.value)
    }

    /// Every rule passes for the current value.
    pub fn is_valid(&self) -> bool {
        self.validity().is_valid()
    }

    /// Description of the first failing rule, `""` when valid.
    pub fn error_message(&self) -> &str {
        self.validity().error_message()
    }

    /// `!is_valid() && touched`: never true before the field was interacted with.
    pub fn has_visible_error(&self) -> bool {
        self.state.touched && !self.is_valid()
    }

    /// The message to render, if any.
    ///
    /// `force` reveals the error of an invalid field that was never touched
    /// (a submit was attempted while the form was invalid).
    pub fn show_error(&self, force: bool) -> Option<&str> {
        let validity = self.validity();
        if validity.is_valid() || !(self.state.touched || force) {
            None
        } else {
            Some(validity.error_message())
        }
    }

    /// The current failure as a [`ValidationError`] carrying this field's name.
    pub fn to_error(&self) -> Option<ValidationError> {
        self.validity().into_result(&self.name).err()
    }
}
