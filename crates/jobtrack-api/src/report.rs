//! `GET /report` — application counts per site, computed on every request.

use std::sync::Arc;

use axum::{Json, extract::State};
use jobtrack_core::{report::SiteCount, store::ApplicationStore};

use crate::error::ApiError;

/// Responds with `[{"site": "...", "count": n}, ...]`.
pub async fn handler<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<SiteCount>>, ApiError>
where
  S: ApplicationStore,
{
  let counts = store.count_by_site().await.map_err(ApiError::store)?;
  Ok(Json(counts.rows()))
}
