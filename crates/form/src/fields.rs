//! The contact form's fields and their rules
//!
//! Each field gets its own [`RuleSet`]; descriptions that repeat across
//! fields (the two name fields) are independent rules, not shared ones.

use std::fmt;
use std::str::FromStr;

use contact_validator::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::UnknownField;

/// Rejects anything but ASCII letters.
pub const ONLY_LETTERS: &str = "Input must contain only alphabet letters";
/// Requires two or more characters.
pub const MIN_TWO_CHARS: &str = "Input must be minimum 2 characters";
/// Requires exactly ten characters.
pub const PHONE_TEN_DIGITS: &str = "Phone number must be exactly 10 digits";
/// Requires a non-blank value.
pub const NOT_EMPTY: &str = "Input must not be empty";
/// Requires a well-formed Gmail address.
pub const GMAIL_FORMAT: &str = "Email format must be user@gmail.com/co.il";

/// Accepted email domains.
pub const GMAIL_DOMAINS: [&str; 2] = ["@gmail.com", "@gmail.co.il"];

/// Identifies one of the four contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    FirstName,
    LastName,
    Phone,
    Email,
}

impl FieldKey {
    /// All fields in the order they are rendered.
    pub const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Phone];

    /// Storage slot of this field inside a form.
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::FirstName => 0,
            Self::LastName => 1,
            Self::Phone => 2,
            Self::Email => 3,
        }
    }

    /// Machine name, e.g. `first_name`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }

    /// Label shown next to the input.
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Phone => "Phone number",
            Self::Email => "Email",
        }
    }

    /// A fresh rule set for this field.
    pub fn rules(self) -> RuleSet {
        match self {
            Self::FirstName => first_name_rules(),
            Self::LastName => last_name_rules(),
            Self::Phone => phone_rules(),
            Self::Email => email_rules(),
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FieldKey {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "firstname" => Ok(Self::FirstName),
            "lastname" => Ok(Self::LastName),
            "phone" | "phonenumber" => Ok(Self::Phone),
            "email" => Ok(Self::Email),
            _ => Err(UnknownField(s.to_owned())),
        }
    }
}

/// First name: letters only (empty passes this rule), then at least 2 chars.
pub fn first_name_rules() -> RuleSet {
    RuleSet::builder()
        .validator(ONLY_LETTERS, ascii_alphabetic())
        .validator(MIN_TWO_CHARS, min_length(2))
        .build()
}

/// Last name: at least 2 chars, then one or more letters only.
pub fn last_name_rules() -> RuleSet {
    RuleSet::builder()
        .validator(MIN_TWO_CHARS, min_length(2))
        .validator(ONLY_LETTERS, ascii_alphabetic().non_empty())
        .build()
}

/// Phone: exactly 10 characters. The input is numeric already, digits are not re-checked.
pub fn phone_rules() -> RuleSet {
    RuleSet::builder()
        .validator(PHONE_TEN_DIGITS, exact_length(10))
        .build()
}

/// Email: non-blank, then a valid address on one of [`GMAIL_DOMAINS`].
pub fn email_rules() -> RuleSet {
    RuleSet::builder()
        .validator(NOT_EMPTY, not_blank())
        .validator(GMAIL_FORMAT, email().and(ends_with_any(GMAIL_DOMAINS)))
        .build()
}
