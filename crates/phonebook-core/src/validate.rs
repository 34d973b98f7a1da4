//! Form-field checks run before any store call.
//!
//! Checks run in a fixed order and the first failure wins: name empty, name
//! numeric (add only), number empty, number non-numeric.

use crate::error::{Result, ValidationError};

/// A non-empty string made only of ASCII digits.
fn is_decimal(s: &str) -> bool { !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) }

fn require_name(name: &str) -> Result<()> {
  if name.trim().is_empty() {
    return Err(ValidationError::EmptyName);
  }
  Ok(())
}

fn require_number(number: &str) -> Result<()> {
  if number.trim().is_empty() {
    return Err(ValidationError::EmptyNumber);
  }
  if !is_decimal(number) {
    return Err(ValidationError::NonNumericNumber);
  }
  Ok(())
}

/// Fields of the add form.
pub fn validate_add(name: &str, number: &str) -> Result<()> {
  require_name(name)?;
  if is_decimal(name.trim()) {
    return Err(ValidationError::NumericName);
  }
  require_number(number)
}

/// Fields of the update form. Numeric names are not rejected here.
pub fn validate_update(name: &str, number: &str) -> Result<()> {
  require_name(name)?;
  require_number(number)
}

/// Fields of the delete form.
pub fn validate_delete(name: &str) -> Result<()> { require_name(name) }

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn add_accepts_text_name_and_digits() {
    assert_eq!(validate_add("Alice", "12345"), Ok(()));
    assert_eq!(validate_add("  Alice Smith ", "0"), Ok(()));
  }

  #[test]
  fn add_rejects_each_bad_field_distinctly() {
    assert_eq!(validate_add("", "123"), Err(ValidationError::EmptyName));
    assert_eq!(validate_add("   ", "123"), Err(ValidationError::EmptyName));
    assert_eq!(validate_add("12345", "123"), Err(ValidationError::NumericName));
    assert_eq!(validate_add("Alice", ""), Err(ValidationError::EmptyNumber));
    assert_eq!(validate_add("Alice", "  "), Err(ValidationError::EmptyNumber));
    assert_eq!(
      validate_add("Alice", "555-1234"),
      Err(ValidationError::NonNumericNumber)
    );

    let messages: std::collections::HashSet<String> = [
      ValidationError::EmptyName,
      ValidationError::NumericName,
      ValidationError::EmptyNumber,
      ValidationError::NonNumericNumber,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    assert_eq!(messages.len(), 4);
  }

  #[test]
  fn add_checks_name_before_number() {
    assert_eq!(validate_add("", ""), Err(ValidationError::EmptyName));
    assert_eq!(validate_add("42", "abc"), Err(ValidationError::NumericName));
  }

  #[test]
  fn number_with_padding_is_not_numeric() {
    assert_eq!(
      validate_update("Alice", " 123 "),
      Err(ValidationError::NonNumericNumber)
    );
  }

  #[test]
  fn update_allows_numeric_name() {
    assert_eq!(validate_update("12345", "555"), Ok(()));
    assert_eq!(validate_update("", "555"), Err(ValidationError::EmptyName));
    assert_eq!(validate_update("Bob", "five"), Err(ValidationError::NonNumericNumber));
  }

  #[test]
  fn delete_only_checks_name() {
    assert_eq!(validate_delete("Bob"), Ok(()));
    assert_eq!(validate_delete(" "), Err(ValidationError::EmptyName));
  }
}
