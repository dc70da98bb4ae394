//! `GET /sites` — the static job-site directory.

use axum::Json;
use jobtrack_core::site::{SITES, Site};

pub async fn handler() -> Json<&'static [Site]> { Json(SITES) }
