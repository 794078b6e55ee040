// ── Runtime store configuration ──
//
// Describes *where* move data comes from and how long it stays fresh.
// Never touches disk; dustloop-config builds one from TOML + env and
// hands it in.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// Default time-to-live for fetched move data.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// Configuration for a [`DataStore`](crate::DataStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// MediaWiki `index.php` endpoint serving `Special:CargoExport`.
    pub endpoint: Url,
    /// Snapshot file holding the last successful fetch.
    pub cache_file: PathBuf,
    /// How long fetched data is served before refetching.
    pub ttl: Duration,
    /// Request timeout for the remote fetch.
    pub timeout: Duration,
}

impl StoreConfig {
    pub fn new(endpoint: Url, cache_file: impl Into<PathBuf>) -> Self {
        Self {
            endpoint,
            cache_file: cache_file.into(),
            ttl: DEFAULT_TTL,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
