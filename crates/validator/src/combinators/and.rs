//! AND combinator - logical conjunction of validators
//!
//! ```rust
//! use contact_validator::combinators::And;
//! use contact_validator::prelude::*;
//!
//! let validator = And::new(min_length(2), ascii_alphabetic());
//! assert!(validator.validate("Al").is_ok());
//! assert!(validator.validate("A").is_err()); // fails min_length
//! ```

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Both validators must pass. The error of the first failing validator is
/// returned and the right validator is not run when the left one fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use std::cell::Cell;

    struct MinLength {
        min: usize,
    }

    impl Validate for MinLength {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.len() >= self.min {
                Ok(())
            } else {
                Err(ValidationError::min_length("", self.min, input.len()))
            }
        }
    }

    struct Counting<'a> {
        calls: &'a Cell<usize>,
    }

    impl Validate for Counting<'_> {
        type Input = str;
        fn validate(&self, _input: &str) -> Result<(), ValidationError> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn test_and_both_pass() {
        let validator = MinLength { min: 2 }.and(MinLength { min: 3 });
        assert!(validator.validate("hello").is_ok());
    }

    #[test]
    fn test_and_reports_first_failure() {
        let validator = MinLength { min: 10 }.and(MinLength { min: 20 });
        let err = validator.validate("hi").unwrap_err();
        assert_eq!(err.param("min"), Some("10"));
    }

    #[test]
    fn test_and_short_circuits() {
        let calls = Cell::new(0);
        let validator = MinLength { min: 10 }.and(Counting { calls: &calls });
        assert!(validator.validate("hi").is_err());
        assert_eq!(calls.get(), 0);
    }
}
