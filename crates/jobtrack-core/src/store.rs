//! The `ApplicationStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `jobtrack-store-sqlite`). Higher layers (`jobtrack-api`, `jobtrack-web`)
//! depend on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  application::{Application, NewApplication},
  report::SiteCounts,
};

/// Abstraction over a jobtrack storage backend.
///
/// Records are append-only: there is no update or delete. Implementations
/// must serialise writes so that concurrent `create` calls each receive a
/// distinct id and none is lost.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ApplicationStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Validate `input`, assign a fresh id, and persist the record.
  ///
  /// The write is committed before the returned future resolves. Nothing is
  /// written if validation fails.
  fn create(
    &self,
    input: NewApplication,
  ) -> impl Future<Output = Result<Application, Self::Error>> + Send + '_;

  /// Every persisted record, in creation order.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Application>, Self::Error>> + Send + '_;

  /// Count applications per site from the current contents.
  ///
  /// The default tallies [`list_all`](Self::list_all); backends may override
  /// it with a grouped query.
  fn count_by_site(
    &self,
  ) -> impl Future<Output = Result<SiteCounts, Self::Error>> + Send + '_ {
    async move {
      let applications = self.list_all().await?;
      Ok(SiteCounts::tally(&applications))
    }
  }
}
