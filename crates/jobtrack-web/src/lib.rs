//! Browser-facing front end for jobtrack.
//!
//! Exposes an axum [`Router`] serving the HTML pages (`/`, `/tracker`,
//! `/report`) with the JSON API from `jobtrack-api` nested under `/api`,
//! backed by any [`ApplicationStore`].

pub mod error;
pub mod handlers;
pub mod html;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use jobtrack_core::store::ApplicationStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `JOBTRACK_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

fn default_host() -> String { "0.0.0.0".to_owned() }

fn default_port() -> u16 { 5000 }

fn default_store_path() -> PathBuf { PathBuf::from("jobs.db") }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       default_host(),
      port:       default_port(),
      store_path: default_store_path(),
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all page handlers.
pub struct AppState<S> {
  pub store: Arc<S>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application [`Router`]: pages, `/api`, and request
/// tracing.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: ApplicationStore + 'static,
{
  let api = jobtrack_api::api_router(Arc::clone(&state.store));

  Router::new()
    .route("/", get(handlers::index))
    .route("/tracker", get(handlers::tracker::<S>).post(handlers::submit::<S>))
    .route("/report", get(handlers::report::<S>))
    .with_state(state)
    .nest("/api", api)
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────
