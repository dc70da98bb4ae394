//! Application — the single persisted record type.
//!
//! Records are immutable once created. The store assigns the id; callers
//! only ever supply a [`NewApplication`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Store-assigned identifier. Never reused, never changed.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ApplicationId(pub i64);

impl fmt::Display for ApplicationId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

/// A persisted job application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
  pub id:     ApplicationId,
  /// Free-form; usually a name from [`crate::site::SITES`] but not required
  /// to be one.
  pub site:   String,
  pub status: String,
  /// `None` and `Some("")` are stored and returned distinctly.
  pub notes:  Option<String>,
}

/// Input to [`crate::store::ApplicationStore::create`].
///
/// Build with [`NewApplication::new`] (which validates) or deserialise and
/// call [`NewApplication::validate`] before handing it to a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApplication {
  pub site:   String,
  pub status: String,
  #[serde(default)]
  pub notes:  Option<String>,
}

impl NewApplication {
  /// Construct and validate in one step.
  pub fn new(
    site: impl Into<String>,
    status: impl Into<String>,
    notes: Option<String>,
  ) -> Result<Self> {
    let input = Self {
      site: site.into(),
      status: status.into(),
      notes,
    };
    input.validate()?;
    Ok(input)
  }

  /// Check that `site` and `status` are present (non-empty). Values are not
  /// trimmed or otherwise normalised.
  pub fn validate(&self) -> Result<()> {
    if self.site.is_empty() {
      return Err(Error::MissingField("site"));
    }
    if self.status.is_empty() {
      return Err(Error::MissingField("status"));
    }
    Ok(())
  }

  /// Attach the store-assigned id, producing the persisted record.
  pub fn into_application(self, id: ApplicationId) -> Application {
    Application {
      id,
      site: self.site,
      status: self.status,
      notes: self.notes,
    }
  }
}
