//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! Validators are generic over their input type:
//!
//! ```rust
//! use contact_validator::foundation::{Validate, ValidationError};
//!
//! struct NoSpaces;
//!
//! impl Validate for NoSpaces {
//!     type Input = str;
//!
//!     fn validate(&self, input: &str) -> Result<(), ValidationError> {
//!         if input.contains(' ') {
//!             Err(ValidationError::new("no_spaces", "Must not contain spaces"))
//!         } else {
//!             Ok(())
//!         }
//!     }
//! }
//!
//! assert!(NoSpaces.validate("abc").is_ok());
//! assert!(NoSpaces.validate("a b").is_err());
//! ```

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};
