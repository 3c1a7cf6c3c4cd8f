//! Prelude module for convenient imports.
//!
//! ```rust
//! use contact_validator::prelude::*;
//!
//! let phone = RuleSet::builder()
//!     .validator("Phone number must be exactly 10 digits", exact_length(10))
//!     .build();
//! assert!(phone.evaluate("1234567890").is_valid());
//! ```

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationErrors};

#[allow(clippy::wildcard_imports, ambiguous_glob_reexports)]
pub use crate::validators::*;

pub use crate::combinators::{And, and};

pub use crate::field::{FieldController, FieldState};
pub use crate::rule::{Evaluation, Rule, RuleEvaluationError, RuleFailure, RuleSet, RuleSetBuilder};
