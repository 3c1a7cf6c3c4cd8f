//! Built-in string validators
//!
//! Every validator here works on `str` and can be turned into a named rule
//! with [`Rule::from_validator`](crate::rule::Rule::from_validator).
//!
//! ```rust
//! use contact_validator::prelude::*;
//!
//! let last_name = min_length(2).and(ascii_alphabetic().non_empty());
//! assert!(last_name.validate("Li").is_ok());
//! assert!(last_name.validate("L1").is_err());
//! ```

pub mod content;
pub mod length;
pub mod pattern;

pub use content::{Email, email};
pub use length::{ExactLength, MinLength, NotBlank, exact_length, min_length, not_blank};
pub use pattern::{
    AsciiAlphabetic, EndsWithAny, ascii_alphabetic, ends_with_any,
};
