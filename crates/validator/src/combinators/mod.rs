//! Combinators for composing validators
//!
//! [`And`]: both validators must pass, first failure wins.

pub mod and;

pub use and::{And, and};
