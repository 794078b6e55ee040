// ── Move data store ──
//
// TTL cache over the wiki export with a snapshot file for cold starts.

mod clock;
mod data_store;
mod snapshot;
mod source;

pub use clock::{Clock, ManualClock, SystemClock};
pub use data_store::{CacheState, DataStore, Dataset, Freshness};
pub use snapshot::SnapshotFile;
pub use source::{MoveSource, move_query};
