//! String length validators
//!
//! Length is measured in Unicode scalar values (chars), not bytes.

use crate::foundation::ValidationError;

// ============================================================================
// NOT BLANK
// ============================================================================

crate::validator! {
    /// Validates that a string has at least one non-whitespace character.
    pub NotBlank for str;
    rule(input) { !input.trim().is_empty() }
    error(input) { ValidationError::new("not_blank", "String must not be blank") }
    fn not_blank();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input) { ValidationError::min_length("", self.min, input.chars().count()) }
    fn min_length(min: usize);
}

// ============================================================================
// EXACT LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has an exact length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExactLength { length: usize } for str;
    rule(self, input) { input.chars().count() == self.length }
    error(self, input) {
        ValidationError::exact_length("", self.length, input.chars().count())
    }
    fn exact_length(length: usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_not_blank() {
        assert!(not_blank().validate("x").is_ok());
        assert!(not_blank().validate("  x  ").is_ok());
        assert!(not_blank().validate("").is_err());
        assert!(not_blank().validate(" \t ").is_err());
    }

    #[test]
    fn test_min_length_boundaries() {
        let validator = min_length(2);
        assert!(validator.validate("Al").is_ok());
        assert!(validator.validate("Alice").is_ok());
        let err = validator.validate("A").unwrap_err();
        assert_eq!(err.param("actual"), Some("1"));
    }

    #[test]
    fn test_exact_length() {
        let validator = exact_length(10);
        assert!(validator.validate("1234567890").is_ok());
        assert!(validator.validate("12345").is_err());
        assert!(validator.validate("12345678901").is_err());
    }

    #[test]
    fn test_unicode_handling() {
        // "éé" is 2 chars but 4 bytes
        assert!(min_length(2).validate("éé").is_ok());
        assert!(exact_length(2).validate("éé").is_ok());
        assert!(exact_length(4).validate("éé").is_err());
    }
}
