//! The static directory of job sites offered in the submission form.
//!
//! This is reference data only. Stored applications are not constrained to
//! these names.

use serde::Serialize;

/// A job board: display name plus landing URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Site {
  pub name: &'static str,
  pub url:  &'static str,
}

const fn site(name: &'static str, url: &'static str) -> Site { Site { name, url } }

/// Known job sites, in display order.
pub const SITES: &[Site] = &[
  site("Y Combinator (Work at a Startup)", "https://www.workatastartup.com"),
  site("Government Jobs", "https://www.governmentjobs.com"),
  site("Welcome to the Jungle (Otta)", "https://www.welcometothejungle.com/en"),
  site("EchoJobs", "https://echojobs.io"),
  site("Twitter", "https://twitter.com"),
  site("Levels.fyi", "https://www.levels.fyi/jobs/"),
  site("Carbons Jobs", "https://jobs.carbons.io"),
  site("Built In", "https://builtin.com/jobs"),
  site("Handshake", "https://joinhandshake.com"),
  site("Wellfound", "https://wellfound.com"),
  site("Dice", "https://www.dice.com"),
  site("Jobright", "https://jobright.com"),
  site("Indeed", "https://www.indeed.com"),
  site("SimplyHired", "https://www.simplyhired.com"),
  site("ZipRecruiter", "https://www.ziprecruiter.com"),
  site("TrueUp.io", "https://www.trueup.io"),
  site("Monster", "https://www.monster.com"),
  site("RippleMatch", "https://ripplematch.com"),
  site("WayUp", "https://www.wayup.com"),
];
