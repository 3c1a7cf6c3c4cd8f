//! Named rules and ordered rule sets
//!
//! A [`Rule`] pairs a human-readable description with a predicate over the
//! field's current string value. A [`RuleSet`] evaluates its rules in
//! declaration order and stops at the first one that returns `false`; that
//! rule's description becomes the field's error message.
//!
//! ```rust
//! use contact_validator::rule::RuleSet;
//!
//! let rules = RuleSet::builder()
//!     .rule("alphabet-only", |v: &str| v.chars().all(|c| c.is_ascii_alphabetic()))
//!     .rule("min-2-chars", |v: &str| v.chars().count() >= 2)
//!     .build();
//!
//! assert_eq!(rules.evaluate("A1").error_message(), "alphabet-only");
//! assert_eq!(rules.evaluate("A").error_message(), "min-2-chars");
//! assert!(rules.evaluate("Al").is_valid());
//! ```
//!
//! Predicates must be pure and must not panic. [`RuleSet::evaluate`] lets a
//! panic unwind to the caller; [`RuleSet::try_evaluate`] converts it into a
//! [`RuleEvaluationError`] naming the offending rule.

mod evaluation;
mod set;

pub use evaluation::{Evaluation, RuleEvaluationError, RuleFailure};
pub use set::{RuleSet, RuleSetBuilder};

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::foundation::Validate;

type Predicate = dyn Fn(&str) -> bool + Send + Sync;

/// A named boolean predicate applied to a field's current value.
///
/// Cloning is cheap: the predicate is shared.
#[derive(Clone)]
pub struct Rule {
    description: Cow<'static, str>,
    predicate: Arc<Predicate>,
}

impl Rule {
    /// Creates a rule from a description and a predicate.
    pub fn new<F>(description: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            description: description.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Adapts a [`Validate`] implementation into a rule.
    ///
    /// The rule passes iff the validator returns `Ok`. The validator's own
    /// error message is discarded in favour of `description`.
    pub fn from_validator<V>(description: impl Into<Cow<'static, str>>, validator: V) -> Self
    where
        V: Validate<Input = str> + Send + Sync + 'static,
    {
        Self::new(description, move |value| validator.validate(value).is_ok())
    }

    /// The description reported when this rule fails.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Applies the predicate to `value`.
    #[inline]
    pub fn check(&self, value: &str) -> bool {
        (self.predicate)(value)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::exact_length;

    #[test]
    fn rule_applies_predicate() {
        let rule = Rule::new("non-empty", |v: &str| !v.is_empty());
        assert_eq!(rule.description(), "non-empty");
        assert!(rule.check("x"));
        assert!(!rule.check(""));
    }

    #[test]
    fn rule_from_validator() {
        let rule = Rule::from_validator("Phone number must be exactly 10 digits", exact_length(10));
        assert!(rule.check("1234567890"));
        assert!(!rule.check("12345"));
    }

    #[test]
    fn debug_shows_description_only() {
        let rule = Rule::new(String::from("dynamic"), |_: &str| true);
        let debug = format!("{rule:?}");
        assert!(debug.contains("dynamic"));
        assert!(debug.starts_with("Rule"));
    }
}
