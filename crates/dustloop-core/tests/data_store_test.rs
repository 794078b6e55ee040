#![allow(clippy::unwrap_used)]
// Integration tests for `DataStore` against a wiremock Cargo export.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use chrono::TimeDelta;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

use dustloop_api::{CargoClient, TransportConfig};
use dustloop_core::store::{MoveSource, SnapshotFile};
use dustloop_core::{Clock, CoreError, DataStore, Field, Freshness, ManualClock, MoveRecord};

const TTL: Duration = Duration::from_secs(3600);

// ── Helpers ─────────────────────────────────────────────────────────

fn source(server: &MockServer) -> MoveSource {
    let endpoint = Url::parse(&format!("{}/wiki/index.php", server.uri())).unwrap();
    MoveSource::new(CargoClient::new(endpoint, &TransportConfig::default()).unwrap())
}

async fn open(server: &MockServer, snapshot: &Path, clock: &Arc<ManualClock>) -> DataStore {
    let clock: Arc<dyn Clock> = clock.clone();
    DataStore::open_with(source(server), SnapshotFile::new(snapshot), TTL, clock).await
}

fn export() -> MockBuilder {
    Mock::given(method("GET"))
        .and(path("/wiki/index.php"))
        .and(query_param("tables", "MoveData_GGST"))
        .and(query_param("format", "json"))
}

fn rows() -> Value {
    json!([
        { "chara": "Sol Badguy", "input": "2D", "name": "Footsweep", "startup": "10" },
        { "chara": "Sol Badguy", "input": "5K", "damage": 20, "onBlock": null },
    ])
}

fn snapshot_rows() -> Vec<MoveRecord> {
    vec![MoveRecord::new("Ky Kiske", "5K").with(Field::Damage, 24)]
}

fn inputs(records: &[MoveRecord]) -> Vec<&str> {
    records.iter().map(MoveRecord::input).collect()
}

// ── Cold start ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_snapshot_warms_store_but_stays_stale() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("moves.json");
    SnapshotFile::new(&file).save(&snapshot_rows()).await.unwrap();

    let store = open(&server, &file, &Arc::new(ManualClock::default())).await;

    assert_eq!(store.state().records.as_slice(), snapshot_rows().as_slice());
    assert_eq!(store.state().fetched_at, None);
    assert_eq!(store.freshness(), Freshness::Stale);
}

#[tokio::test]
async fn test_first_read_replaces_snapshot_with_remote_data() {
    let server = MockServer::start().await;
    export()
        .respond_with(ResponseTemplate::new(200).set_body_json(rows()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("moves.json");
    SnapshotFile::new(&file).save(&snapshot_rows()).await.unwrap();

    let store = open(&server, &file, &Arc::new(ManualClock::default())).await;
    let data = store.current_dataset().await;

    assert_eq!(inputs(&data), ["2D", "5K"]);
    assert_eq!(store.freshness(), Freshness::Fresh);

    let persisted = SnapshotFile::new(&file).load().await.unwrap().unwrap();
    assert_eq!(persisted, *data);
}

#[tokio::test]
async fn test_corrupt_snapshot_degrades_to_empty() {
    let server = MockServer::start().await;
    export()
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("moves.json");
    std::fs::write(&file, "[{\"chara\":").unwrap();

    let store = open(&server, &file, &Arc::new(ManualClock::default())).await;

    assert!(store.current_dataset().await.is_empty());
}

// ── Freshness ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_fresh_data_is_served_without_refetching() {
    let server = MockServer::start().await;
    export()
        .respond_with(ResponseTemplate::new(200).set_body_json(rows()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let clock = Arc::new(ManualClock::default());
    let store = open(&server, &dir.path().join("moves.json"), &clock).await;

    store.current_dataset().await;
    clock.advance(TimeDelta::minutes(59));
    let data = store.current_dataset().await;

    assert_eq!(data.len(), 2);
    assert_eq!(store.data_age(), Some(TimeDelta::minutes(59)));
}

#[tokio::test]
async fn test_expired_data_is_refetched() {
    let server = MockServer::start().await;
    export()
        .respond_with(ResponseTemplate::new(200).set_body_json(rows()))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    export()
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "chara": "May", "input": "6P" },
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let clock = Arc::new(ManualClock::default());
    let store = open(&server, &dir.path().join("moves.json"), &clock).await;

    assert_eq!(store.current_dataset().await.len(), 2);
    clock.advance(TimeDelta::hours(1));
    assert_eq!(inputs(&store.current_dataset().await), ["6P"]);
}

#[tokio::test]
async fn test_concurrent_stale_reads_fetch_once() {
    let server = MockServer::start().await;
    export()
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(rows())
                .set_delay(Duration::from_millis(50)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = open(
        &server,
        &dir.path().join("moves.json"),
        &Arc::new(ManualClock::default()),
    )
    .await;

    let (a, b, c) = tokio::join!(
        store.current_dataset(),
        store.current_dataset(),
        store.current_dataset()
    );

    assert_eq!((a.len(), b.len(), c.len()), (2, 2, 2));
}

#[tokio::test]
async fn test_concurrent_stale_reads_share_a_failed_fetch() {
    let server = MockServer::start().await;
    export()
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_string("maintenance")
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("moves.json");
    SnapshotFile::new(&file).save(&snapshot_rows()).await.unwrap();
    let store = open(&server, &file, &Arc::new(ManualClock::default())).await;

    let results = tokio::join!(
        store.current_dataset(),
        store.current_dataset(),
        store.current_dataset(),
        store.current_dataset(),
        store.current_dataset()
    );

    for data in [results.0, results.1, results.2, results.3, results.4] {
        assert_eq!(inputs(&data), ["5K"]);
    }
    assert_eq!(store.state().fetched_at, None);
}

#[tokio::test]
async fn test_stale_read_after_failed_fetch_tries_again() {
    let server = MockServer::start().await;
    export()
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    export()
        .respond_with(ResponseTemplate::new(200).set_body_json(rows()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = open(
        &server,
        &dir.path().join("moves.json"),
        &Arc::new(ManualClock::default()),
    )
    .await;

    assert!(store.current_dataset().await.is_empty());
    assert_eq!(store.current_dataset().await.len(), 2);
}

// ── Failure handling ────────────────────────────────────────────────

#[tokio::test]
async fn test_failed_refresh_keeps_previous_dataset() {
    let server = MockServer::start().await;
    export()
        .respond_with(ResponseTemplate::new(200).set_body_json(rows()))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    export()
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let clock = Arc::new(ManualClock::default());
    let store = open(&server, &dir.path().join("moves.json"), &clock).await;

    let before = store.current_dataset().await;
    let fetched_at = store.state().fetched_at;
    clock.advance(TimeDelta::hours(2));

    let after = store.current_dataset().await;

    assert_eq!(*after, *before);
    assert_eq!(store.state().fetched_at, fetched_at);
    assert_eq!(store.freshness(), Freshness::Stale);
}

#[tokio::test]
async fn test_failed_first_fetch_serves_empty_dataset() {
    let server = MockServer::start().await;
    export()
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>down</html>"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = open(
        &server,
        &dir.path().join("moves.json"),
        &Arc::new(ManualClock::default()),
    )
    .await;

    assert!(store.current_dataset().await.is_empty());
    assert!(!dir.path().join("moves.json").exists());
}

#[tokio::test]
async fn test_forced_refresh_reports_errors() {
    let server = MockServer::start().await;
    export()
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = open(
        &server,
        &dir.path().join("moves.json"),
        &Arc::new(ManualClock::default()),
    )
    .await;

    let err = store.refresh().await.unwrap_err();
    assert!(
        matches!(err, CoreError::FetchFailed { status: Some(503), transient: true, .. }),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn test_unwritable_snapshot_does_not_block_refresh() {
    let server = MockServer::start().await;
    export()
        .respond_with(ResponseTemplate::new(200).set_body_json(rows()))
        .mount(&server)
        .await;

    // A directory where the snapshot file should be makes every write fail.
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("moves.json");
    std::fs::create_dir(&file).unwrap();

    let store = open(&server, &file, &Arc::new(ManualClock::default())).await;
    let data = store.refresh().await.unwrap();

    assert_eq!(data.len(), 2);
    assert_eq!(store.freshness(), Freshness::Fresh);
    assert!(!store.snapshot_in_sync());
}

#[tokio::test]
async fn test_snapshot_sync_tracks_writes() {
    let server = MockServer::start().await;
    export()
        .respond_with(ResponseTemplate::new(200).set_body_json(rows()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = open(
        &server,
        &dir.path().join("cache").join("moves.json"),
        &Arc::new(ManualClock::default()),
    )
    .await;
    assert!(!store.snapshot_in_sync());

    store.refresh().await.unwrap();
    assert!(store.snapshot_in_sync());
}
