//! File store round trips and timestamp ordering

use chrono::{Duration, TimeZone, Utc};
use poly_agent::data::{timestamp_id, EventSnapshot, FileStore, EVENTS_DIR};
use tempfile::TempDir;

use crate::support::event;

#[tokio::test]
async fn test_snapshot_round_trip_keeps_unknown_fields() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    let mut e = event("e1", 1500.0, "0.52");
    e.extra.insert("negRisk".to_string(), serde_json::json!(true));
    let snapshot = EventSnapshot::new(Utc::now(), vec![e]);

    let path = store.write(EventSnapshot::path("run"), &snapshot).await.unwrap();
    assert!(path.starts_with(dir.path()));
    assert!(path.ends_with("events/run.json"));

    let loaded: EventSnapshot = store.read("events/run.json").await.unwrap().unwrap();
    assert_eq!(loaded.event_count, 1);
    assert_eq!(loaded.events[0].id, "e1");
    assert_eq!(loaded.events[0].extra["negRisk"], serde_json::json!(true));
    assert_eq!(
        serde_json::to_value(&loaded).unwrap(),
        serde_json::to_value(&snapshot).unwrap()
    );
}

#[tokio::test]
async fn test_timestamped_files_list_in_order() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());
    let base = Utc.with_ymd_and_hms(2024, 1, 15, 9, 59, 59).unwrap();

    // Written out of order; listing must still be chronological
    let offsets = [5_i64, 0, 1_000, 3];
    for ms in offsets {
        let at = base + Duration::milliseconds(ms);
        let snapshot = EventSnapshot::new(at, vec![]);
        store
            .write(EventSnapshot::path(&timestamp_id(at)), &snapshot)
            .await
            .unwrap();
    }

    let names = store.list_files(EVENTS_DIR).await.unwrap();
    assert_eq!(
        names,
        vec![
            "2024-01-15T09-59-59-000Z.json",
            "2024-01-15T09-59-59-003Z.json",
            "2024-01-15T09-59-59-005Z.json",
            "2024-01-15T10-00-00-000Z.json",
        ]
    );

    let latest: EventSnapshot = store.latest(EVENTS_DIR).await.unwrap().unwrap();
    assert_eq!(latest.timestamp, base + Duration::milliseconds(1_000));
}

#[test]
fn test_missing_directory_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("never-created"));

    let names = tokio_test::block_on(store.list_files("actions")).unwrap();
    assert!(names.is_empty());

    let latest: Option<EventSnapshot> = tokio_test::block_on(store.latest("actions")).unwrap();
    assert!(latest.is_none());
}

#[tokio::test]
async fn test_escaping_paths_rejected() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("data"));

    assert!(store.write("../outside.json", &1).await.is_err());
    assert!(!dir.path().join("outside.json").exists());
}
