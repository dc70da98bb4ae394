//! Error type for `jobtrack-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The input was rejected before anything was written.
  #[error("validation error: {0}")]
  Validation(#[from] jobtrack_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// A row read back from the database violates a model invariant.
  #[error("invalid stored data: {0}")]
  InvalidData(String),
}

impl Error {
  pub fn is_validation(&self) -> bool { matches!(self, Error::Validation(_)) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
