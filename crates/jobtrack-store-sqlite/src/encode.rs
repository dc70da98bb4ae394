//! Row types read straight out of SQLite, and their conversion into domain
//! types.

use jobtrack_core::{
  application::{Application, ApplicationId},
  report::SiteCounts,
};

use crate::{Error, Result};

/// Column list shared by every `SELECT` over `applications`.
pub const APPLICATION_COLUMNS: &str = "id, site, status, notes";

/// An `applications` row as SQLite hands it back.
pub struct RawApplication {
  pub id:     i64,
  pub site:   String,
  pub status: String,
  pub notes:  Option<String>,
}

impl RawApplication {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:     row.get(0)?,
      site:   row.get(1)?,
      status: row.get(2)?,
      notes:  row.get(3)?,
    })
  }

  pub fn into_application(self) -> Application {
    Application {
      id:     ApplicationId(self.id),
      site:   self.site,
      status: self.status,
      notes:  self.notes,
    }
  }
}

/// One row of `SELECT site, COUNT(*) ... GROUP BY site`.
pub struct RawSiteCount {
  pub site:  String,
  pub count: i64,
}

impl RawSiteCount {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self { site: row.get(0)?, count: row.get(1)? })
  }
}

pub fn decode_site_counts(raws: Vec<RawSiteCount>) -> Result<SiteCounts> {
  raws
    .into_iter()
    .map(|raw| {
      let count = u64::try_from(raw.count).map_err(|_| {
        Error::InvalidData(format!("negative count {} for site {:?}", raw.count, raw.site))
      })?;
      Ok((raw.site, count))
    })
    .collect()
}
