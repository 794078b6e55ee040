//! Frame-data lookup engine between `dustloop-api` and chat front ends.
//!
//! - **[`AliasRegistry`]**: resolves `SO`, `sol` or `Sol Badguy` to one
//!   roster [`Character`]. Exact modulo case, no fuzzy matching.
//!
//! - **[`DataStore`]**: time-to-live cache over the wiki's Cargo export.
//!   Warms from a snapshot file at startup, refetches once data is older
//!   than the TTL, keeps serving the previous dataset when a fetch fails,
//!   and persists every successful fetch.
//!
//! - **[`ResolutionEngine`]**: filters rows to one character, runs a tiered
//!   fuzzy search over move inputs, then formats the requested [`Field`].
//!
//! - **[`FrameDataService`]**: the facade chat code calls; always returns a
//!   reply string.
//!
//! - **[`chat`]**: `!framedata` / `!fd` parsing and the [`MessageHandler`]
//!   that turns `(channel, text)` into replies.

pub mod chat;
pub mod config;
pub mod error;
pub mod facade;
pub mod model;
pub mod registry;
pub mod resolve;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use chat::{ChatCommand, MessageHandler};
pub use config::StoreConfig;
pub use error::{CoreError, LookupError};
pub use facade::FrameDataService;
pub use model::{Character, Field, FieldValue, MoveRecord};
pub use registry::AliasRegistry;
pub use resolve::{MoveMatcher, ResolutionEngine};
pub use store::{CacheState, Clock, DataStore, Dataset, Freshness, ManualClock, SystemClock};
