//! # contact-form
//!
//! The contact form: four validated fields, a submit-attempted flag that
//! reveals every outstanding error, and a pluggable send operation.
//!
//! ```rust
//! use contact_form::{ContactForm, FieldKey, SubmitError};
//!
//! let mut form = ContactForm::new();
//! form.set_value(FieldKey::FirstName, "A1");
//!
//! // Untouched fields keep their errors hidden...
//! assert_eq!(form.visible_error(FieldKey::FirstName), None);
//!
//! // ...until a submit is attempted while the form is invalid.
//! assert!(matches!(form.begin_submit(), Err(SubmitError::Blocked(_))));
//! assert_eq!(
//!     form.visible_error(FieldKey::FirstName),
//!     Some("Input must contain only alphabet letters"),
//! );
//! ```

pub mod error;
pub mod fields;
pub mod form;
pub mod notice;
pub mod payload;
pub mod sender;

pub use error::{SendError, SubmitError, UnknownField};
pub use fields::FieldKey;
pub use form::{ContactForm, FormPhase, Submission};
pub use notice::Notice;
pub use payload::ContactPayload;
pub use sender::{ContactSender, EmailJsConfig, EmailJsSender, LogSender};
