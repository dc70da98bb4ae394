//! Page handlers for the browser-facing routes.

use axum::{
  Form,
  extract::State,
  http::StatusCode,
  response::{Html, IntoResponse, Redirect, Response},
};
use jobtrack_core::{application::NewApplication, store::ApplicationStore};
use serde::Deserialize;

use crate::{
  AppState,
  error::Error,
  html::{self, FormState},
};

/// `GET /`
pub async fn index() -> Html<String> { Html(html::index()) }

/// `GET /tracker`
pub async fn tracker<S>(State(state): State<AppState<S>>) -> Result<Html<String>, Error>
where
  S: ApplicationStore,
{
  let applications = state.store.list_all().await.map_err(Error::store)?;
  Ok(Html(html::tracker(&applications, &FormState::default())))
}

/// Fields posted by the tracker form. Absent fields decode as empty strings
/// (or `None` for notes) so they fall through to validation.
#[derive(Debug, Deserialize)]
pub struct TrackerForm {
  #[serde(default)]
  pub site:   String,
  #[serde(default)]
  pub status: String,
  pub notes:  Option<String>,
}

/// `POST /tracker` — record the application, then redirect back to the
/// listing. On a validation failure the form is shown again with the
/// submitted values.
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Form(form): Form<TrackerForm>,
) -> Result<Response, Error>
where
  S: ApplicationStore,
{
  let input = match NewApplication::new(
    form.site.clone(),
    form.status.clone(),
    form.notes.clone(),
  ) {
    Ok(input) => input,
    Err(e) => {
      tracing::warn!(error = %e, "rejected tracker submission");
      let applications = state.store.list_all().await.map_err(Error::store)?;
      let message = e.to_string();
      let page = html::tracker(&applications, &FormState {
        error:  Some(&message),
        site:   &form.site,
        status: &form.status,
        notes:  form.notes.as_deref().unwrap_or(""),
      });
      return Ok((StatusCode::BAD_REQUEST, Html(page)).into_response());
    }
  };

  let application = state.store.create(input).await.map_err(Error::store)?;
  tracing::info!(id = %application.id, site = %application.site, "application recorded");

  Ok(Redirect::to("/tracker").into_response())
}

/// `GET /report`
pub async fn report<S>(State(state): State<AppState<S>>) -> Result<Html<String>, Error>
where
  S: ApplicationStore,
{
  let counts = state.store.count_by_site().await.map_err(Error::store)?;
  Ok(Html(html::report(&counts)))
}
