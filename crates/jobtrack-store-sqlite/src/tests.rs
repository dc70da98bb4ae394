//! Integration tests for `SqliteStore` against in-memory and on-disk
//! databases.

use std::collections::HashSet;

use jobtrack_core::{application::NewApplication, store::ApplicationStore};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn input(site: &str, status: &str, notes: Option<&str>) -> NewApplication {
  NewApplication {
    site:   site.into(),
    status: status.into(),
    notes:  notes.map(str::to_owned),
  }
}

// ─── create / list_all ───────────────────────────────────────────────────────

#[tokio::test]
async fn create_then_list_contains_record_verbatim() {
  let s = store().await;

  let created = s
    .create(input("Indeed", "applied", Some("referred by a friend")))
    .await
    .unwrap();
  assert_eq!(created.site, "Indeed");
  assert_eq!(created.status, "applied");
  assert_eq!(created.notes.as_deref(), Some("referred by a friend"));

  let all = s.list_all().await.unwrap();
  assert_eq!(all, vec![created]);

  let counts = s.count_by_site().await.unwrap();
  assert_eq!(counts.get("Indeed"), Some(1));
  assert_eq!(counts.len(), 1);
}

#[tokio::test]
async fn each_create_gets_a_fresh_id() {
  let s = store().await;

  let a = s.create(input("Dice", "applied", None)).await.unwrap();
  let b = s.create(input("Dice", "applied", None)).await.unwrap();
  let c = s.create(input("Monster", "rejected", None)).await.unwrap();

  assert_ne!(a.id, b.id);
  assert_ne!(b.id, c.id);
  assert_ne!(a.id, c.id);
}

#[tokio::test]
async fn list_all_is_in_creation_order() {
  let s = store().await;
  let first  = s.create(input("WayUp", "applied", None)).await.unwrap();
  let second = s.create(input("Dice", "interviewing", None)).await.unwrap();
  let third  = s.create(input("Built In", "rejected", None)).await.unwrap();

  let ids: Vec<_> = s.list_all().await.unwrap().into_iter().map(|a| a.id).collect();
  assert_eq!(ids, vec![first.id, second.id, third.id]);
}

#[tokio::test]
async fn notes_absent_and_empty_stay_distinct() {
  let s = store().await;
  let none  = s.create(input("Dice", "applied", None)).await.unwrap();
  let empty = s.create(input("Dice", "applied", Some(""))).await.unwrap();

  let all = s.list_all().await.unwrap();
  let find = |id| all.iter().find(|a| a.id == id).unwrap();
  assert_eq!(find(none.id).notes, None);
  assert_eq!(find(empty.id).notes.as_deref(), Some(""));
}

#[tokio::test]
async fn site_outside_directory_is_accepted() {
  let s = store().await;
  let app = s
    .create(input("My Cousin's Startup", "applied", None))
    .await
    .unwrap();
  assert_eq!(app.site, "My Cousin's Startup");
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_site_is_rejected_without_writing() {
  let s = store().await;
  s.create(input("Dice", "applied", None)).await.unwrap();

  let err = s.create(input("", "applied", None)).await.unwrap_err();
  assert!(err.is_validation());
  assert!(matches!(
    err,
    Error::Validation(jobtrack_core::Error::MissingField("site"))
  ));

  assert_eq!(s.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn empty_status_is_rejected_without_writing() {
  let s = store().await;

  let err = s.create(input("Dice", "", Some("notes"))).await.unwrap_err();
  assert!(matches!(
    err,
    Error::Validation(jobtrack_core::Error::MissingField("status"))
  ));

  assert!(s.list_all().await.unwrap().is_empty());
  assert!(s.count_by_site().await.unwrap().is_empty());
}

#[tokio::test]
async fn whitespace_only_site_is_stored_verbatim() {
  let s = store().await;
  let app = s.create(input(" ", "applied", None)).await.unwrap();
  assert_eq!(app.site, " ");
  assert_eq!(s.count_by_site().await.unwrap().get(" "), Some(1));
}

// ─── Storage failures ────────────────────────────────────────────────────────

/// A store whose table has been dropped underneath it.
async fn broken_store() -> SqliteStore {
  let conn = tokio_rusqlite::Connection::open_in_memory().await.unwrap();
  let s = SqliteStore::from_connection(conn.clone()).await.unwrap();
  conn
    .call(|conn| {
      conn.execute_batch("DROP TABLE applications")?;
      Ok(())
    })
    .await
    .unwrap();
  s
}

#[tokio::test]
async fn reads_surface_database_errors() {
  let s = broken_store().await;
  assert!(matches!(s.list_all().await.unwrap_err(), Error::Database(_)));
  assert!(matches!(s.count_by_site().await.unwrap_err(), Error::Database(_)));
}

#[tokio::test]
async fn create_surfaces_database_error() {
  let s = broken_store().await;
  let err = s.create(input("Dice", "applied", None)).await.unwrap_err();
  assert!(matches!(err, Error::Database(_)));
  assert!(!err.is_validation());
}

// ─── count_by_site ───────────────────────────────────────────────────────────

#[tokio::test]
async fn count_by_site_groups_records() {
  let s = store().await;
  s.create(input("A", "x", None)).await.unwrap();
  s.create(input("A", "y", None)).await.unwrap();
  s.create(input("B", "z", None)).await.unwrap();

  let counts = s.count_by_site().await.unwrap();
  assert_eq!(counts.len(), 2);
  assert_eq!(counts.get("A"), Some(2));
  assert_eq!(counts.get("B"), Some(1));
}

#[tokio::test]
async fn grouped_query_agrees_with_tally() {
  let s = store().await;
  for (site, status) in [
    ("Indeed", "applied"),
    ("Dice", "applied"),
    ("Indeed", "rejected"),
    ("Wellfound", "interviewing"),
    ("Indeed", "interviewing"),
  ] {
    s.create(input(site, status, None)).await.unwrap();
  }

  let grouped = s.count_by_site().await.unwrap();
  let tallied =
    jobtrack_core::report::SiteCounts::tally(&s.list_all().await.unwrap());
  assert_eq!(grouped, tallied);
}

#[tokio::test]
async fn empty_store_has_no_records_and_no_counts() {
  let s = store().await;
  assert!(s.list_all().await.unwrap().is_empty());
  assert!(s.count_by_site().await.unwrap().is_empty());
}

#[tokio::test]
async fn reads_are_repeatable_without_writes() {
  let s = store().await;
  s.create(input("Dice", "applied", None)).await.unwrap();
  s.create(input("Monster", "applied", Some("remote"))).await.unwrap();

  assert_eq!(s.list_all().await.unwrap(), s.list_all().await.unwrap());
  assert_eq!(
    s.count_by_site().await.unwrap(),
    s.count_by_site().await.unwrap()
  );
}

#[tokio::test]
async fn report_is_not_cached() {
  let s = store().await;
  s.create(input("Dice", "applied", None)).await.unwrap();
  assert_eq!(s.count_by_site().await.unwrap().get("Dice"), Some(1));

  s.create(input("Dice", "interviewing", None)).await.unwrap();
  assert_eq!(s.count_by_site().await.unwrap().get("Dice"), Some(2));
}

// ─── Concurrency ─────────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_get_distinct_ids() {
  let s = store().await;

  let handles: Vec<_> = (0..32)
    .map(|i| {
      let s = s.clone();
      tokio::spawn(async move {
        s.create(input(&format!("site-{}", i % 4), "applied", None))
          .await
          .unwrap()
      })
    })
    .collect();

  let mut ids = HashSet::new();
  for handle in handles {
    assert!(ids.insert(handle.await.unwrap().id));
  }

  assert_eq!(s.list_all().await.unwrap().len(), 32);
  let counts = s.count_by_site().await.unwrap();
  assert!(counts.iter().all(|(_, n)| n == 8));
}

// ─── Persistence ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn records_survive_reopen() {
  let dir  = tempfile::tempdir().unwrap();
  let path = dir.path().join("jobs.db");

  let created = {
    let s = SqliteStore::open(&path).await.unwrap();
    s.create(input("Handshake", "applied", Some("career fair")))
      .await
      .unwrap()
  };

  // Reopening runs the schema step again; it must leave data untouched.
  let s = SqliteStore::open(&path).await.unwrap();
  assert_eq!(s.list_all().await.unwrap(), vec![created.clone()]);

  let next = s.create(input("Handshake", "interviewing", None)).await.unwrap();
  assert!(next.id > created.id);
}

#[tokio::test]
async fn ensure_schema_is_idempotent() {
  let s = store().await;
  s.create(input("Dice", "applied", None)).await.unwrap();
  s.ensure_schema().await.unwrap();
  s.ensure_schema().await.unwrap();
  assert_eq!(s.list_all().await.unwrap().len(), 1);
}
