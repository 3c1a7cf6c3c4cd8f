//! Character-class and affix validators

use crate::foundation::ValidationError;

// ============================================================================
// ASCII ALPHABETIC
// ============================================================================

crate::validator! {
    /// Validates that a string contains only ASCII letters (`A-Z`, `a-z`).
    ///
    /// The empty string passes unless [`AsciiAlphabetic::non_empty`] is used.
    #[derive(Copy, PartialEq, Eq, Hash, Default)]
    pub AsciiAlphabetic { require_one: bool } for str;
    rule(self, input) {
        (!self.require_one || !input.is_empty()) && input.chars().all(|c| c.is_ascii_alphabetic())
    }
    error(self, input) {
        ValidationError::new("ascii_alphabetic", "String must contain only letters A-Z")
    }
    new() { Self { require_one: false } }
    fn ascii_alphabetic();
}

impl AsciiAlphabetic {
    /// Additionally requires at least one letter.
    #[must_use = "builder methods must be chained or built"]
    pub fn non_empty(mut self) -> Self {
        self.require_one = true;
        self
    }
}

// ============================================================================
// ENDS WITH ANY
// ============================================================================

crate::validator! {
    /// Validates that a string ends with one of the given suffixes.
    #[derive(PartialEq, Eq, Hash)]
    pub EndsWithAny { suffixes: Vec<String> } for str;
    rule(self, input) { self.suffixes.iter().any(|s| input.ends_with(s.as_str())) }
    error(self, input) {
        ValidationError::new(
            "ends_with_any",
            format!("String must end with one of: {}", self.suffixes.join(", ")),
        )
        .with_param("suffixes", self.suffixes.join(","))
    }
    new(suffixes: impl IntoIterator<Item = impl Into<String>>) {
        Self { suffixes: suffixes.into_iter().map(Into::into).collect() }
    }
    fn ends_with_any(suffixes: impl IntoIterator<Item = impl Into<String>>);
}
