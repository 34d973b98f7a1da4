//! Error types for `phonebook-core`.
//!
//! The `Display` text of each variant is the message shown to the user.

use thiserror::Error;

/// A form field rejected before any store call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("Invalid input: Name can not be empty")]
  EmptyName,

  #[error("Invalid input: Name of person should be text")]
  NumericName,

  #[error("Invalid input: Phone number can not be empty")]
  EmptyNumber,

  #[error("Invalid input: Phone number should be in numeric format")]
  NonNumericNumber,
}

pub type Result<T, E = ValidationError> = std::result::Result<T, E>;
