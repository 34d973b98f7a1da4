//! The `ContactStore` trait.
//!
//! Implemented by storage backends (e.g. `phonebook-store-sqlite`). The web
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::outcome::{DeleteOutcome, InsertOutcome, SearchOutcome, UpdateOutcome};

/// Abstraction over a phonebook backend.
///
/// `name` arguments are matched case-insensitively after trimming. When
/// several rows share a name, update and delete act on the one with the
/// lowest id.
///
/// All methods return `Send` futures so the trait can be used from axum
/// handlers on a multi-threaded runtime.
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Case-insensitive substring match of `keyword` against names.
  fn search<'a>(
    &'a self,
    keyword: &'a str,
  ) -> impl Future<Output = Result<SearchOutcome, Self::Error>> + Send + 'a;

  /// Add a contact unless one with the same name already exists.
  fn insert<'a>(
    &'a self,
    name: &'a str,
    number: &'a str,
  ) -> impl Future<Output = Result<InsertOutcome, Self::Error>> + Send + 'a;

  /// Replace the number of the contact called `name`.
  fn update<'a>(
    &'a self,
    name: &'a str,
    number: &'a str,
  ) -> impl Future<Output = Result<UpdateOutcome, Self::Error>> + Send + 'a;

  /// Remove the contact called `name`.
  fn delete<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Result<DeleteOutcome, Self::Error>> + Send + 'a;
}
