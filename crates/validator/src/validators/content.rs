//! String content validators

use std::sync::LazyLock;

use crate::foundation::ValidationError;

/// Dot-separated atoms of printable ASCII specials, letters, digits or
/// non-ASCII (BMP, excluding surrogates and non-characters), then a domain of
/// one or more labels and an alphabetic TLD.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    const ATOM: &str = r"[A-Za-z0-9!#$%&'*+/=?^_`{|}~\-\x{A1}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]+";
    const LABEL: &str = r"[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?";
    regex::Regex::new(&format!(r"^{ATOM}(?:\.{ATOM})*@(?:{LABEL}\.)+[A-Za-z]{{2,}}$")).unwrap()
});

/// Longest accepted local part, in bytes.
const MAX_LOCAL_PART: usize = 64;

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email address shape.
    ///
    /// The local part is one or more non-empty atoms joined by single dots,
    /// at most 64 bytes, and may contain non-ASCII letters. The domain needs
    /// at least two labels.
    pub Email { pattern: regex::Regex } for str;
    rule(self, input) {
        input
            .rsplit_once('@')
            .is_some_and(|(local, _)| local.len() <= MAX_LOCAL_PART)
            && self.pattern.is_match(input)
    }
    error(self, input) { ValidationError::invalid_format("", "email") }
    new() {
        Self {
            pattern: EMAIL_REGEX.clone(),
        }
    }
    fn email();
}
