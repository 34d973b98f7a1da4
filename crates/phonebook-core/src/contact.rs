//! The contact record and the name conventions shared by every layer.
//!
//! Names are stored trimmed and lower-cased and displayed title-cased. The
//! lower-cased form is what lookups compare against.

/// One row of the phonebook table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
  pub id:     i64,
  /// Display form (title-cased).
  pub name:   String,
  pub number: String,
}

/// The lookup key for `name`: trimmed and lower-cased.
pub fn normalize_name(name: &str) -> String { name.trim().to_lowercase() }

/// The display form for `name`: trimmed and title-cased.
pub fn display_name(name: &str) -> String { title_case(name.trim()) }

/// Upper-case the first letter of every run of letters and lower-case the
/// rest. Any non-letter (space, apostrophe, digit, hyphen) starts a new run.
pub fn title_case(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  let mut in_word = false;

  for c in s.chars() {
    if c.is_alphabetic() {
      if in_word {
        out.extend(c.to_lowercase());
      } else {
        out.extend(c.to_uppercase());
      }
      in_word = true;
    } else {
      out.push(c);
      in_word = false;
    }
  }

  out
}
