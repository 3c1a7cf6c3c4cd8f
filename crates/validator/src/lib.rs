//! # contact-validator
//!
//! Named-rule validation for single string inputs, decoupled from any UI toolkit.
//!
//! ## Quick Start
//!
//! ```rust
//! use contact_validator::prelude::*;
//!
//! let rules = RuleSet::builder()
//!     .rule("Input must contain only alphabet letters", |v: &str| {
//!         v.chars().all(|c| c.is_ascii_alphabetic())
//!     })
//!     .rule("Input must be minimum 2 characters", |v: &str| v.chars().count() >= 2)
//!     .build();
//!
//! let mut first_name = FieldController::named("first_name", rules);
//! first_name.set_value("A1");
//! assert!(!first_name.is_valid());
//! assert_eq!(first_name.error_message(), "Input must contain only alphabet letters");
//!
//! // Nothing is shown until the field has been blurred once.
//! assert!(!first_name.has_visible_error());
//! first_name.mark_touched();
//! assert!(first_name.has_visible_error());
//! ```
//!
//! ## Layers
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait and structured errors.
//! - [`validators`] / [`combinators`]: reusable string checks, composable with `.and()`.
//! - [`rule`]: [`Rule`](rule::Rule) and the ordered, first-failure-wins [`RuleSet`](rule::RuleSet).
//! - [`field`]: [`FieldController`](field::FieldController), one input's value + touched state.

// ValidationError carries field and params; returning it unboxed is intended.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod field;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rule;
pub mod validators;
