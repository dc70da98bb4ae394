//! SQL schema for the jobtrack SQLite store.
//!
//! Applied by [`crate::SqliteStore::ensure_schema`] once per connection.
//! There is no migration step; `user_version` records the layout in case one
//! is ever needed.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Append-only. No UPDATE or DELETE is ever issued against this table.
-- AUTOINCREMENT keeps ids from being reused.
-- Column lengths are declarations only; SQLite does not enforce them.
CREATE TABLE IF NOT EXISTS applications (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    site    VARCHAR(100) NOT NULL,
    status  VARCHAR(50)  NOT NULL,
    notes   TEXT
);

CREATE INDEX IF NOT EXISTS applications_site_idx ON applications(site);

PRAGMA user_version = 1;
";
