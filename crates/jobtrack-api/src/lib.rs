//! JSON REST API for jobtrack.
//!
//! Exposes an axum [`Router`] backed by any
//! [`jobtrack_core::store::ApplicationStore`]. TLS and transport concerns are
//! the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", jobtrack_api::api_router(store.clone()))
//! ```

pub mod applications;
pub mod error;
pub mod report;
pub mod sites;

use std::sync::Arc;

use axum::{Router, routing::get};
use jobtrack_core::store::ApplicationStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ApplicationStore + 'static,
{
  Router::new()
    .route(
      "/applications",
      get(applications::list::<S>).post(applications::create::<S>),
    )
    .route("/report", get(report::handler::<S>))
    .route("/sites", get(sites::handler))
    .with_state(store)
}
