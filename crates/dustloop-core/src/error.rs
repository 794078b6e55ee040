// ── Core error types ──
//
// Two families. `LookupError` is what a user sees in chat and renders as
// the reply text itself. `CoreError` covers fetch and snapshot failures,
// which the store recovers from locally; consumers never see HTTP status
// codes or JSON parse failures directly.

use std::path::PathBuf;

use thiserror::Error;

/// Why a frame-data question could not be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Character not found")]
    CharacterNotFound,

    #[error("Move not found")]
    MoveNotFound,

    #[error("Invalid property")]
    InvalidProperty,
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Remote data ──────────────────────────────────────────────────
    #[error("Failed to fetch move data: {message}")]
    FetchFailed {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
        /// Whether a later retry may succeed.
        transient: bool,
    },

    // ── Snapshot file ────────────────────────────────────────────────
    #[error("Snapshot I/O failed for {}: {source}", .path.display())]
    SnapshotIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Snapshot {} is not valid move data: {message}", .path.display())]
    SnapshotFormat { path: PathBuf, message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<dustloop_api::Error> for CoreError {
    fn from(err: dustloop_api::Error) -> Self {
        match err {
            dustloop_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            dustloop_api::Error::ClientBuild(message) => CoreError::Config { message },
            other => CoreError::FetchFailed {
                status: other.status(),
                transient: other.is_transient(),
                message: other.to_string(),
            },
        }
    }
}
