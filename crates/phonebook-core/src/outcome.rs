//! Typed results of store operations.
//!
//! A search with no matches is [`SearchOutcome::NoResult`] rather than a
//! placeholder record; the placeholder only exists at display time via
//! [`SearchOutcome::rows`]. Mutations return an outcome whose `Display` is
//! the status message shown to the user. "Not found" is an outcome, not an
//! error.

use std::fmt;

use crate::contact::Contact;

/// Text shown in both columns when a search matches nothing.
pub const NO_RESULT: &str = "No Result";

// ─── Search ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
  /// At least one contact matched, in id order.
  Matches(Vec<Contact>),
  NoResult,
}

/// A name/number pair ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRow<'a> {
  pub name:   &'a str,
  pub number: &'a str,
}

impl SearchOutcome {
  pub fn from_matches(contacts: Vec<Contact>) -> Self {
    if contacts.is_empty() {
      Self::NoResult
    } else {
      Self::Matches(contacts)
    }
  }

  pub fn is_empty(&self) -> bool { matches!(self, Self::NoResult) }

  pub fn contacts(&self) -> &[Contact] {
    match self {
      Self::Matches(contacts) => contacts,
      Self::NoResult => &[],
    }
  }

  /// Rows for the result table. `NoResult` yields a single `No Result` row.
  pub fn rows(&self) -> Vec<DisplayRow<'_>> {
    match self {
      Self::Matches(contacts) => contacts
        .iter()
        .map(|c| DisplayRow { name: &c.name, number: &c.number })
        .collect(),
      Self::NoResult => vec![DisplayRow { name: NO_RESULT, number: NO_RESULT }],
    }
  }
}

// ─── Insert ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
  /// `name` is the stored row's name, title-cased.
  AlreadyExists { name: String },
  Added { name: String },
}

impl fmt::Display for InsertOutcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::AlreadyExists { name } => {
        write!(f, "Person with name {name} already exists.")
      }
      Self::Added { name } => {
        write!(f, "Person {name} added to Phonebook successfully")
      }
    }
  }
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
  NotFound { name: String },
  Updated { name: String },
}

impl fmt::Display for UpdateOutcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::NotFound { name } => write!(f, "Person with name {name} does not exist."),
      Self::Updated { name } => {
        write!(f, "Phone record of {name} is updated successfully")
      }
    }
  }
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
  NotFound { name: String },
  Deleted { name: String },
}

impl fmt::Display for DeleteOutcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::NotFound { name } => {
        write!(f, "Person with name {name} does not exist, no need to delete.")
      }
      Self::Deleted { name } => write!(
        f,
        "Phone record of {name} is deleted from the phonebook successfully"
      ),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn contact(id: i64, name: &str, number: &str) -> Contact {
    Contact { id, name: name.into(), number: number.into() }
  }

  #[test]
  fn empty_matches_become_no_result() {
    assert_eq!(SearchOutcome::from_matches(vec![]), SearchOutcome::NoResult);
    assert!(SearchOutcome::NoResult.contacts().is_empty());
  }

  #[test]
  fn no_result_renders_single_placeholder_row() {
    let rows = SearchOutcome::NoResult.rows();
    assert_eq!(rows, vec![DisplayRow { name: "No Result", number: "No Result" }]);
  }

  #[test]
  fn matches_render_one_row_each() {
    let outcome = SearchOutcome::from_matches(vec![
      contact(1, "Callahan", "1234567890"),
      contact(3, "Sergio Taco", "67854"),
    ]);
    assert!(!outcome.is_empty());
    let rows = outcome.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], DisplayRow { name: "Sergio Taco", number: "67854" });
  }

  #[test]
  fn mutation_messages() {
    let name = || "Bob".to_string();
    assert_eq!(
      InsertOutcome::AlreadyExists { name: name() }.to_string(),
      "Person with name Bob already exists."
    );
    assert_eq!(
      InsertOutcome::Added { name: name() }.to_string(),
      "Person Bob added to Phonebook successfully"
    );
    assert_eq!(
      UpdateOutcome::NotFound { name: name() }.to_string(),
      "Person with name Bob does not exist."
    );
    assert_eq!(
      UpdateOutcome::Updated { name: name() }.to_string(),
      "Phone record of Bob is updated successfully"
    );
    assert_eq!(
      DeleteOutcome::NotFound { name: name() }.to_string(),
      "Person with name Bob does not exist, no need to delete."
    );
    assert_eq!(
      DeleteOutcome::Deleted { name: name() }.to_string(),
      "Phone record of Bob is deleted from the phonebook successfully"
    );
  }
}
