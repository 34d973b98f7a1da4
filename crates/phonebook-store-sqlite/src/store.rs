//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use phonebook_core::{
  contact::{display_name, normalize_name},
  outcome::{DeleteOutcome, InsertOutcome, SearchOutcome, UpdateOutcome},
  store::ContactStore,
};

use crate::{
  Result,
  encode::{RawContact, contains_pattern},
  schema::{DROP, PRAGMAS, SCHEMA, SEED_CONTACTS},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A phonebook backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Every
/// statement runs on the connection's own thread, so calls are serialised.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(PRAGMAS)?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Drop and recreate the table, then insert [`SEED_CONTACTS`].
  pub async fn reset(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        let tx = conn.transaction()?;
        tx.execute_batch(DROP)?;
        tx.execute_batch(SCHEMA)?;
        for (name, number) in SEED_CONTACTS {
          tx.execute(
            "INSERT INTO phonebook (name, number) VALUES (?1, ?2)",
            rusqlite::params![normalize_name(name), number],
          )?;
        }
        tx.commit()?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert a row without the duplicate-name check.
  #[cfg(test)]
  pub(crate) async fn insert_unchecked(&self, name: &str, number: &str) -> Result<i64> {
    let name   = name.to_owned();
    let number = number.to_owned();
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO phonebook (name, number) VALUES (?1, ?2)",
          rusqlite::params![name, number],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;
    Ok(id)
  }
}

/// First row whose lower-cased name equals `key`.
fn find_by_name(
  conn: &rusqlite::Connection,
  key: &str,
) -> rusqlite::Result<Option<RawContact>> {
  conn
    .query_row(
      "SELECT id, name, number FROM phonebook
       WHERE lower(name) = ?1
       ORDER BY id
       LIMIT 1",
      rusqlite::params![key],
      RawContact::from_row,
    )
    .optional()
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = crate::Error;

  async fn search<'a>(&'a self, keyword: &'a str) -> Result<SearchOutcome> {
    let pattern = contains_pattern(&normalize_name(keyword));

    let raws: Vec<RawContact> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, name, number FROM phonebook
           WHERE lower(name) LIKE ?1 ESCAPE '\\'
           ORDER BY id",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![pattern], RawContact::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(SearchOutcome::from_matches(
      raws.into_iter().map(RawContact::into_contact).collect(),
    ))
  }

  async fn insert<'a>(&'a self, name: &'a str, number: &'a str) -> Result<InsertOutcome> {
    let key     = normalize_name(name);
    let display = display_name(name);
    let number  = number.to_owned();

    let outcome = self
      .conn
      .call(move |conn| {
        // Existence check and insert are one transaction.
        let tx = conn.transaction()?;
        let outcome = match find_by_name(&tx, &key)? {
          Some(existing) => InsertOutcome::AlreadyExists {
            name: display_name(&existing.name),
          },
          None => {
            tx.execute(
              "INSERT INTO phonebook (name, number) VALUES (?1, ?2)",
              rusqlite::params![key, number],
            )?;
            InsertOutcome::Added { name: display }
          }
        };
        tx.commit()?;
        Ok(outcome)
      })
      .await?;

    Ok(outcome)
  }

  async fn update<'a>(&'a self, name: &'a str, number: &'a str) -> Result<UpdateOutcome> {
    let key     = normalize_name(name);
    let display = display_name(name);
    let number  = number.to_owned();

    let outcome = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let outcome = match find_by_name(&tx, &key)? {
          None => UpdateOutcome::NotFound { name: display },
          Some(existing) => {
            tx.execute(
              "UPDATE phonebook SET name = ?1, number = ?2 WHERE id = ?3",
              rusqlite::params![existing.name, number, existing.id],
            )?;
            UpdateOutcome::Updated { name: display }
          }
        };
        tx.commit()?;
        Ok(outcome)
      })
      .await?;

    Ok(outcome)
  }

  async fn delete<'a>(&'a self, name: &'a str) -> Result<DeleteOutcome> {
    let key     = normalize_name(name);
    let display = display_name(name);

    let outcome = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let outcome = match find_by_name(&tx, &key)? {
          None => DeleteOutcome::NotFound { name: display },
          Some(existing) => {
            tx.execute(
              "DELETE FROM phonebook WHERE id = ?1",
              rusqlite::params![existing.id],
            )?;
            DeleteOutcome::Deleted { name: display }
          }
        };
        tx.commit()?;
        Ok(outcome)
      })
      .await?;

    Ok(outcome)
  }
}
