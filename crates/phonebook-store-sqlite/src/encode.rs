//! Conversions between domain values and what the `phonebook` table stores.

use phonebook_core::{Contact, contact::display_name};

/// Escape `%`, `_` and `\` so `s` matches literally inside a `LIKE` pattern
/// declared with `ESCAPE '\'`.
pub fn escape_like(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    if matches!(c, '%' | '_' | '\\') {
      out.push('\\');
    }
    out.push(c);
  }
  out
}

/// `LIKE` pattern for a substring match on an already-normalised keyword.
pub fn contains_pattern(keyword: &str) -> String {
  format!("%{}%", escape_like(keyword))
}

/// Columns read directly from a `phonebook` row.
pub struct RawContact {
  pub id:     i64,
  pub name:   String,
  pub number: String,
}

impl RawContact {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:     row.get(0)?,
      name:   row.get(1)?,
      number: row.get(2)?,
    })
  }

  pub fn into_contact(self) -> Contact {
    Contact {
      id:     self.id,
      name:   display_name(&self.name),
      number: self.number,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn like_wildcards_are_escaped() {
    assert_eq!(escape_like("a%b_c\\d"), "a\\%b\\_c\\\\d");
    assert_eq!(contains_pattern("call"), "%call%");
    assert_eq!(contains_pattern("50%"), "%50\\%%");
  }
}
