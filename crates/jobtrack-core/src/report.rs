//! Per-site application counts.
//!
//! Counts are always derived from the current store contents; nothing here
//! is cached.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::application::Application;

/// One row of the per-site report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteCount {
  pub site:  String,
  pub count: u64,
}

/// Mapping from observed site to the number of applications recorded for it.
///
/// Sites with no applications are absent. Iteration order is alphabetical,
/// but callers should not rely on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteCounts(BTreeMap<String, u64>);

impl SiteCounts {
  /// Count `applications` by their `site` field.
  pub fn tally(applications: &[Application]) -> Self {
    let mut counts = BTreeMap::new();
    for app in applications {
      *counts.entry(app.site.clone()).or_insert(0) += 1;
    }
    Self(counts)
  }

  pub fn get(&self, site: &str) -> Option<u64> { self.0.get(site).copied() }

  pub fn len(&self) -> usize { self.0.len() }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
    self.0.iter().map(|(site, count)| (site.as_str(), *count))
  }

  /// The mapping flattened into report rows.
  pub fn rows(&self) -> Vec<SiteCount> {
    self
      .iter()
      .map(|(site, count)| SiteCount { site: site.to_owned(), count })
      .collect()
  }
}

impl FromIterator<(String, u64)> for SiteCounts {
  fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
    Self(iter.into_iter().collect())
  }
}
