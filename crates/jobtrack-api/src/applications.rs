//! Handlers for `/applications` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/applications` | All records, creation order |
//! | `POST` | `/applications` | Body: `{"site":"Indeed","status":"applied","notes":"..."}` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use jobtrack_core::{
  application::{Application, NewApplication},
  store::ApplicationStore,
};
use serde::Deserialize;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /applications`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Application>>, ApiError>
where
  S: ApplicationStore,
{
  let applications = store.list_all().await.map_err(ApiError::store)?;
  Ok(Json(applications))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// Request body for `POST /applications`.
///
/// Absent or `null` `site`/`status` are treated as empty so they are
/// reported as validation failures rather than JSON shape errors.
#[derive(Debug, Deserialize)]
pub struct CreateBody {
  #[serde(default)]
  pub site:   Option<String>,
  #[serde(default)]
  pub status: Option<String>,
  #[serde(default)]
  pub notes:  Option<String>,
}

/// `POST /applications`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<CreateBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ApplicationStore,
{
  let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
  let input = NewApplication::new(
    body.site.unwrap_or_default(),
    body.status.unwrap_or_default(),
    body.notes,
  )?;
  let application = store.create(input).await.map_err(ApiError::store)?;
  tracing::info!(id = %application.id, site = %application.site, "application recorded");
  Ok((StatusCode::CREATED, Json(application)))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
