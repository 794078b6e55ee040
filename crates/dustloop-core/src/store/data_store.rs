// ── Move data store ──
//
// Owns the single mutable resource in the system: the published
// `CacheState`. It is only ever replaced wholesale through `ArcSwap`, so
// readers always see either the old dataset or the new one, never a mix.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use arc_swap::ArcSwap;
use chrono::{DateTime, TimeDelta, Utc};
use dustloop_api::TransportConfig;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::clock::{Clock, SystemClock};
use super::snapshot::SnapshotFile;
use super::source::MoveSource;
use crate::config::StoreConfig;
use crate::error::CoreError;
use crate::model::MoveRecord;

/// An immutable, shared set of move rows.
pub type Dataset = Arc<Vec<MoveRecord>>;

/// Whether cached data may be served without refetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Fresh,
    Stale,
}

/// The published dataset together with when it was fetched.
///
/// `fetched_at` is `None` for data that never came from a successful
/// remote fetch in this process (empty, or loaded from the snapshot).
#[derive(Debug, Clone, Default)]
pub struct CacheState {
    pub records: Dataset,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl CacheState {
    pub fn freshness(&self, now: DateTime<Utc>, ttl: TimeDelta) -> Freshness {
        match self.fetched_at {
            Some(at) if now - at < ttl => Freshness::Fresh,
            _ => Freshness::Stale,
        }
    }
}

/// Time-to-live cache in front of the wiki, backed by a snapshot file.
pub struct DataStore {
    source: MoveSource,
    snapshot: SnapshotFile,
    ttl: TimeDelta,
    clock: Arc<dyn Clock>,
    state: ArcSwap<CacheState>,
    /// Serializes refreshes so simultaneous stale reads cost one fetch.
    refresh_lock: Mutex<()>,
    /// Finished fetch attempts, successful or not. Bumped under `refresh_lock`.
    attempts: AtomicU64,
    /// Whether the snapshot file holds the published records.
    snapshot_in_sync: AtomicBool,
}

impl DataStore {
    /// Build a store from config and warm it from the snapshot file.
    pub async fn open(config: &StoreConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig::default().with_timeout(config.timeout);
        let source = MoveSource::connect(config.endpoint.clone(), &transport)?;
        let snapshot = SnapshotFile::new(&config.cache_file);
        Ok(Self::open_with(source, snapshot, config.ttl, Arc::new(SystemClock)).await)
    }

    /// Build a store from parts and warm it from the snapshot file.
    ///
    /// Snapshot problems are logged and leave the store empty; the loaded
    /// data is stale, so the first read still tries the wiki.
    pub async fn open_with(
        source: MoveSource,
        snapshot: SnapshotFile,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let loaded = snapshot.load().await;
        let in_sync = matches!(loaded, Ok(Some(_)));
        let records = match loaded {
            Ok(Some(records)) => {
                info!(
                    records = records.len(),
                    path = %snapshot.path().display(),
                    "loaded move data snapshot"
                );
                records
            }
            Ok(None) => {
                debug!(path = %snapshot.path().display(), "no move data snapshot yet");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "failed to load move data snapshot");
                Vec::new()
            }
        };

        Self {
            source,
            snapshot,
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
            clock,
            state: ArcSwap::from_pointee(CacheState {
                records: Arc::new(records),
                fetched_at: None,
            }),
            refresh_lock: Mutex::new(()),
            attempts: AtomicU64::new(0),
            snapshot_in_sync: AtomicBool::new(in_sync),
        }
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// The dataset to answer queries from.
    ///
    /// Fresh data is served as is. Stale data triggers one refresh; if that
    /// fails the previous dataset (possibly empty) is served unchanged.
    /// Readers queued behind a fetch take its outcome instead of retrying.
    pub async fn current_dataset(&self) -> Dataset {
        let state = self.state.load_full();
        if self.freshness_of(&state) == Freshness::Fresh {
            return Arc::clone(&state.records);
        }

        let seen = self.attempts.load(Ordering::Acquire);
        let _guard = self.refresh_lock.lock().await;

        // Another task fetched while we waited; use whatever it published.
        let state = self.state.load_full();
        if self.attempts.load(Ordering::Acquire) != seen
            || self.freshness_of(&state) == Freshness::Fresh
        {
            return Arc::clone(&state.records);
        }

        match self.fetch_and_publish().await {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    error = %e,
                    cached = state.records.len(),
                    "move data refresh failed, serving cached data"
                );
                Arc::clone(&state.records)
            }
        }
    }

    /// The published state, without triggering a refresh.
    pub fn state(&self) -> Arc<CacheState> {
        self.state.load_full()
    }

    pub fn freshness(&self) -> Freshness {
        self.freshness_of(&self.state.load())
    }

    pub fn snapshot_path(&self) -> &std::path::Path {
        self.snapshot.path()
    }

    /// Whether the snapshot file matches the published dataset. False after
    /// a refresh whose snapshot write failed.
    pub fn snapshot_in_sync(&self) -> bool {
        self.snapshot_in_sync.load(Ordering::Acquire)
    }

    /// How long ago the last successful fetch happened, or `None` if never.
    pub fn data_age(&self) -> Option<TimeDelta> {
        self.state.load().fetched_at.map(|t| self.clock.now() - t)
    }

    // ── Writes ───────────────────────────────────────────────────────

    /// Fetch from the wiki now, regardless of freshness.
    pub async fn refresh(&self) -> Result<Dataset, CoreError> {
        let _guard = self.refresh_lock.lock().await;
        self.fetch_and_publish().await
    }

    /// Fetch, publish, then persist. The in-memory swap happens before the
    /// disk write, and a failed write does not undo it.
    async fn fetch_and_publish(&self) -> Result<Dataset, CoreError> {
        let fetched = self.source.fetch().await;
        self.attempts.fetch_add(1, Ordering::Release);
        let records: Dataset = Arc::new(fetched?);
        let fetched_at = self.clock.now();

        self.state.store(Arc::new(CacheState {
            records: Arc::clone(&records),
            fetched_at: Some(fetched_at),
        }));
        info!(records = records.len(), "move data refreshed");

        let saved = self.snapshot.save(&records).await;
        if let Err(e) = &saved {
            warn!(error = %e, "failed to persist move data snapshot");
        }
        self.snapshot_in_sync.store(saved.is_ok(), Ordering::Release);

        Ok(records)
    }

    fn freshness_of(&self, state: &CacheState) -> Freshness {
        state.freshness(self.clock.now(), self.ttl)
    }
}
