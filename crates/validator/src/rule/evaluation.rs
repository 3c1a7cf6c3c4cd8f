//! Outcome of evaluating a rule set against one value

use std::fmt;

use thiserror::Error;

use crate::foundation::ValidationError;

/// The first failing rule of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleFailure<'a> {
    /// Position of the rule in its set (0-based).
    pub index: usize,
    /// The rule's description.
    pub description: &'a str,
}

/// Validity derived from a rule set and a value. Never cached.
///
/// `is_valid()` is true iff `error_message()` is empty iff every rule passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Evaluation<'a> {
    failure: Option<RuleFailure<'a>>,
}

impl<'a> Evaluation<'a> {
    /// Every rule passed.
    pub const VALID: Self = Self { failure: None };

    pub(crate) fn failed(index: usize, description: &'a str) -> Self {
        Self {
            failure: Some(RuleFailure { index, description }),
        }
    }

    /// Returns true when every rule passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failure.is_none()
    }

    /// Description of the first failing rule, or `""` when valid.
    #[must_use]
    pub fn error_message(&self) -> &'a str {
        self.failure.map_or("", |f| f.description)
    }

    /// The first failing rule, if any.
    #[must_use]
    pub fn failure(&self) -> Option<RuleFailure<'a>> {
        self.failure
    }

    /// Converts into a `rule_failed` [`ValidationError`] for `field`.
    pub fn into_result(self, field: &str) -> Result<(), ValidationError> {
        match self.failure {
            None => Ok(()),
            Some(RuleFailure { index, description }) => {
                let error = ValidationError::rule_failed(description.to_owned(), index);
                Err(if field.is_empty() {
                    error
                } else {
                    error.with_field(field.to_owned())
                })
            }
        }
    }
}

impl fmt::Display for Evaluation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.failure {
            None => f.write_str("valid"),
            Some(failure) => write!(f, "invalid: {}", failure.description),
        }
    }
}

/// A predicate panicked while a rule set was being evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("rule #{index} \"{description}\" failed to evaluate: {message}")]
pub struct RuleEvaluationError {
    /// Description of the rule whose predicate panicked.
    pub description: String,
    /// Position of that rule in its set.
    pub index: usize,
    /// Panic payload, when it was a string.
    pub message: String,
}
