//! HTML page rendering.
//!
//! Pages are assembled as plain strings. Every piece of user-supplied text
//! goes through [`esc`] before it is written.

use std::borrow::Cow;

use jobtrack_core::{
  application::Application,
  report::SiteCounts,
  site::{SITES, Site},
};

/// HTML-escape `s` (`<`, `>`, `&`, `'`, `"`).
pub fn esc(s: &str) -> Cow<'_, str> { quick_xml::escape::escape(s) }

fn page(title: &str, body: &str) -> String {
  format!(
    "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
     <title>{title}</title>\n</head>\n<body>\n\
     <nav><a href=\"/\">Sites</a> | <a href=\"/tracker\">Tracker</a> | \
     <a href=\"/report\">Report</a></nav>\n\
     <h1>{title}</h1>\n{body}</body>\n</html>\n",
    title = esc(title),
  )
}

fn site_links(sites: &[Site]) -> String {
  let mut out = String::from("<ul>\n");
  for site in sites {
    out.push_str(&format!(
      "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></li>\n",
      esc(site.url),
      esc(site.name),
    ));
  }
  out.push_str("</ul>\n");
  out
}

// ─── Index ───────────────────────────────────────────────────────────────────

pub fn index() -> String { page("Job Sites", &site_links(SITES)) }

// ─── Tracker ─────────────────────────────────────────────────────────────────

/// Values to pre-fill the submission form with, plus an optional error to
/// show above it.
#[derive(Debug, Default)]
pub struct FormState<'a> {
  pub error:  Option<&'a str>,
  pub site:   &'a str,
  pub status: &'a str,
  pub notes:  &'a str,
}

fn tracker_form(form: &FormState<'_>) -> String {
  let mut out = String::new();
  if let Some(error) = form.error {
    out.push_str(&format!("<p class=\"error\">{}</p>\n", esc(error)));
  }

  out.push_str("<form method=\"post\" action=\"/tracker\">\n");
  out.push_str("<label>Site <select name=\"site\">\n");
  for site in SITES {
    let selected = if site.name == form.site { " selected" } else { "" };
    out.push_str(&format!(
      "<option value=\"{name}\"{selected}>{name}</option>\n",
      name = esc(site.name),
    ));
  }
  out.push_str("</select></label>\n");
  out.push_str(&format!(
    "<label>Status <input name=\"status\" value=\"{}\"></label>\n",
    esc(form.status),
  ));
  out.push_str(&format!(
    "<label>Notes <textarea name=\"notes\">{}</textarea></label>\n",
    esc(form.notes),
  ));
  out.push_str("<button type=\"submit\">Add</button>\n</form>\n");
  out
}

fn applications_table(applications: &[Application]) -> String {
  if applications.is_empty() {
    return "<p>No applications yet.</p>\n".to_owned();
  }

  let mut out = String::from(
    "<table>\n<tr><th>Site</th><th>Status</th><th>Notes</th></tr>\n",
  );
  for app in applications {
    out.push_str(&format!(
      "<tr id=\"application-{}\"><td>{}</td><td>{}</td><td>{}</td></tr>\n",
      app.id,
      esc(&app.site),
      esc(&app.status),
      esc(app.notes.as_deref().unwrap_or("")),
    ));
  }
  out.push_str("</table>\n");
  out
}

pub fn tracker(applications: &[Application], form: &FormState<'_>) -> String {
  let body = format!(
    "{}<h2>Applications</h2>\n{}",
    tracker_form(form),
    applications_table(applications),
  );
  page("Application Tracker", &body)
}

// ─── Report ──────────────────────────────────────────────────────────────────

pub fn report(counts: &SiteCounts) -> String {
  let mut body = String::from(
    "<table>\n<tr><th>Site</th><th>Applications</th></tr>\n",
  );
  for (site, count) in counts.iter() {
    body.push_str(&format!("<tr><td>{}</td><td>{count}</td></tr>\n", esc(site)));
  }
  body.push_str("</table>\n");
  page("Applications per Site", &body)
}
