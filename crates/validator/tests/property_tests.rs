//! Property-based tests for rule sets and field controllers.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use contact_validator::prelude::*;
use proptest::prelude::*;

/// Rule `i` passes iff bit `i` of the mask is set; every call is counted per rule.
fn masked_rules(mask: &[bool], calls: &Arc<Vec<AtomicUsize>>) -> RuleSet {
    mask.iter()
        .enumerate()
        .map(|(i, &passes)| {
            let calls = Arc::clone(calls);
            Rule::new(format!("rule-{i}"), move |_: &str| {
                calls[i].fetch_add(1, Ordering::SeqCst);
                passes
            })
        })
        .collect()
}

fn counters(n: usize) -> Arc<Vec<AtomicUsize>> {
    Arc::new((0..n).map(|_| AtomicUsize::new(0)).collect())
}

// ============================================================================
// VALID IFF EVERY PREDICATE PASSES
// ============================================================================

proptest! {
    #[test]
    fn valid_iff_all_rules_pass(mask in prop::collection::vec(any::<bool>(), 0..8), value in ".{0,12}") {
        let calls = counters(mask.len());
        let rules = masked_rules(&mask, &calls);
        let evaluation = rules.evaluate(&value);

        prop_assert_eq!(evaluation.is_valid(), mask.iter().all(|&p| p));
        prop_assert_eq!(evaluation.is_valid(), evaluation.error_message().is_empty());
    }

    #[test]
    fn reports_first_failure_and_skips_the_rest(mask in prop::collection::vec(any::<bool>(), 1..8)) {
        let calls = counters(mask.len());
        let rules = masked_rules(&mask, &calls);
        let evaluation = rules.evaluate("value");

        match mask.iter().position(|&p| !p) {
            None => prop_assert!(evaluation.is_valid()),
            Some(first) => {
                let expected = format!("rule-{first}");
                prop_assert_eq!(evaluation.error_message(), expected.as_str());
                for (i, count) in calls.iter().enumerate() {
                    let expected_calls = usize::from(i <= first);
                    prop_assert_eq!(count.load(Ordering::SeqCst), expected_calls);
                }
            }
        }
    }
}

// ============================================================================
// FIELD CONTROLLER
// ============================================================================

proptest! {
    #[test]
    fn untouched_field_never_shows_an_error(value in ".{0,20}") {
        let rules = RuleSet::builder().validator("min-5", min_length(5)).build();
        let mut field = FieldController::new(rules);
        field.set_value(value);
        prop_assert!(!field.has_visible_error());
    }

    #[test]
    fn visible_error_is_invalid_and_touched(value in ".{0,20}", touched in any::<bool>()) {
        let rules = RuleSet::builder().validator("alpha", ascii_alphabetic()).build();
        let mut field = FieldController::new(rules);
        field.set_value(value);
        if touched {
            field.mark_touched();
        }
        prop_assert_eq!(field.has_visible_error(), !field.is_valid() && touched);
    }

    #[test]
    fn reset_restores_initial_state(value in ".{0,20}", touched in any::<bool>()) {
        let mut field = FieldController::new(RuleSet::builder().validator("not blank", not_blank()).build());
        let pristine_valid = field.is_valid();
        field.set_value(value);
        if touched {
            field.mark_touched();
        }
        field.reset();

        prop_assert_eq!(field.snapshot(), FieldState::default());
        prop_assert_eq!(field.is_valid(), pristine_valid);
        prop_assert!(!field.has_visible_error());
    }

    #[test]
    fn evaluation_is_deterministic(value in ".{0,20}") {
        let rules = RuleSet::builder()
            .validator("alpha", ascii_alphabetic())
            .validator("min-2", min_length(2))
            .build();
        prop_assert_eq!(rules.evaluate(&value), rules.evaluate(&value));
    }
}
