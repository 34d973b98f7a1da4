//! SQL schema and seed data for the phonebook table.

/// Connection settings, applied once at open.
pub const PRAGMAS: &str = "PRAGMA journal_mode = WAL;";

/// Table DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS phonebook (
    id     INTEGER PRIMARY KEY AUTOINCREMENT,
    name   TEXT NOT NULL CHECK (length(name)   <= 100),  -- trimmed, lower-cased
    number TEXT NOT NULL CHECK (length(number) <= 100)
);

-- Lookups compare on lower(name).
CREATE INDEX IF NOT EXISTS phonebook_name_idx ON phonebook(lower(name));
";

/// Dropped before [`SCHEMA`] is re-run on reset.
pub const DROP: &str = "DROP TABLE IF EXISTS phonebook;";

/// Sample rows inserted by [`crate::SqliteStore::reset`], as `(name, number)`.
pub const SEED_CONTACTS: &[(&str, &str)] = &[
  ("Callahan", "1234567890"),
  ("Sergio Taco", "67854"),
  ("Vincenzo Altobelli", "876543554"),
];
