//! Ordered, first-failure-wins rule sets

use std::any::Any;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use super::{Evaluation, Rule, RuleEvaluationError};
use crate::foundation::Validate;

/// An ordered sequence of [`Rule`]s for one field.
///
/// Immutable once built. Rules sharing a description are all kept and all
/// reachable; [`RuleSet::duplicate_descriptions`] lists such descriptions.
#[derive(Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Creates a rule set from rules in evaluation order.
    pub fn new(rules: Vec<Rule>) -> Self {
        let set = Self { rules };
        set.warn_on_duplicates();
        set
    }

    /// A rule set with no rules. Every value is valid.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Starts building a rule set.
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true when the set has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over the rules in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Rule descriptions in evaluation order.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(Rule::description)
    }

    /// Descriptions used by more than one rule, each listed once, in order of
    /// their second occurrence.
    pub fn duplicate_descriptions(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for description in self.descriptions() {
            if !seen.insert(description) && !duplicates.contains(&description) {
                duplicates.push(description);
            }
        }
        duplicates
    }

    /// Evaluates the rules against `value`, stopping at the first failure.
    ///
    /// Rules after the first failing one are not invoked. A panicking
    /// predicate unwinds through this call; use [`RuleSet::try_evaluate`]
    /// to capture it instead.
    pub fn evaluate(&self, value: &str) -> Evaluation<'_> {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| !rule.check(value))
            .map_or(Evaluation::VALID, |(index, rule)| {
                Evaluation::failed(index, rule.description())
            })
    }

    /// Same as [`RuleSet::evaluate`], but a panicking predicate is reported as
    /// a [`RuleEvaluationError`] naming the rule instead of unwinding.
    ///
    /// Requires `panic = "unwind"`; with `abort` the process still aborts.
    pub fn try_evaluate(&self, value: &str) -> Result<Evaluation<'_>, RuleEvaluationError> {
        for (index, rule) in self.rules.iter().enumerate() {
            let passed = panic::catch_unwind(AssertUnwindSafe(|| rule.check(value))).map_err(
                |payload| RuleEvaluationError {
                    description: rule.description().to_owned(),
                    index,
                    message: panic_message(payload.as_ref()),
                },
            )?;
            if !passed {
                return Ok(Evaluation::failed(index, rule.description()));
            }
        }
        Ok(Evaluation::VALID)
    }

    fn warn_on_duplicates(&self) {
        let duplicates = self.duplicate_descriptions();
        if !duplicates.is_empty() {
            tracing::warn!(
                ?duplicates,
                "rule set contains repeated descriptions; failures will be indistinguishable"
            );
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.descriptions()).finish()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`RuleSet`]. Rules are evaluated in the order they are added.
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    rules: Vec<Rule>,
}

impl RuleSetBuilder {
    /// Appends a rule from a description and predicate.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<F>(mut self, description: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule::new(description, predicate));
        self
    }

    /// Appends a rule backed by a [`Validate`] implementation.
    #[must_use = "builder methods must be chained or built"]
    pub fn validator<V>(mut self, description: impl Into<Cow<'static, str>>, validator: V) -> Self
    where
        V: Validate<Input = str> + Send + Sync + 'static,
    {
        self.rules.push(Rule::from_validator(description, validator));
        self
    }

    /// Appends an existing rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn push(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Finishes the rule set.
    pub fn build(self) -> RuleSet {
        RuleSet::new(self.rules)
    }
}
