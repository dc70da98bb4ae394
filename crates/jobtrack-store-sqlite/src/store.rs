//! [`SqliteStore`] — the SQLite implementation of [`ApplicationStore`].

use std::path::Path;

use jobtrack_core::{
  application::{Application, ApplicationId, NewApplication},
  report::SiteCounts,
  store::ApplicationStore,
};

use crate::{
  Result,
  encode::{APPLICATION_COLUMNS, RawApplication, RawSiteCount, decode_site_counts},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A jobtrack store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and ensure the schema exists.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    Self::from_connection(conn).await
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    Self::from_connection(conn).await
  }

  /// Wrap an already-open connection and ensure the schema exists.
  pub async fn from_connection(conn: tokio_rusqlite::Connection) -> Result<Self> {
    let store = Self { conn };
    store.ensure_schema().await?;
    Ok(store)
  }

  /// Create the `applications` table if it is missing. Safe to call again on
  /// an initialised database.
  pub async fn ensure_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    tracing::debug!("schema ensured");
    Ok(())
  }
}

// ─── ApplicationStore impl ───────────────────────────────────────────────────

impl ApplicationStore for SqliteStore {
  type Error = crate::Error;

  async fn create(&self, input: NewApplication) -> Result<Application> {
    input.validate()?;

    let site   = input.site.clone();
    let status = input.status.clone();
    let notes  = input.notes.clone();

    // Single autocommit INSERT: either the whole row lands or nothing does.
    // Reading the rowid on the same connection closure keeps it paired with
    // this insert even under concurrent callers.
    let id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO applications (site, status, notes) VALUES (?1, ?2, ?3)",
          rusqlite::params![site, status, notes],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    let application = input.into_application(ApplicationId(id));
    tracing::debug!(id = %application.id, site = %application.site, "application created");
    Ok(application)
  }

  async fn list_all(&self) -> Result<Vec<Application>> {
    let raws: Vec<RawApplication> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {APPLICATION_COLUMNS} FROM applications ORDER BY id"
        ))?;
        let rows = stmt
          .query_map([], RawApplication::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    tracing::debug!(count = raws.len(), "listed applications");
    Ok(raws.into_iter().map(RawApplication::into_application).collect())
  }

  async fn count_by_site(&self) -> Result<SiteCounts> {
    let raws: Vec<RawSiteCount> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT site, COUNT(*) FROM applications GROUP BY site",
        )?;
        let rows = stmt
          .query_map([], RawSiteCount::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    decode_site_counts(raws)
  }
}
