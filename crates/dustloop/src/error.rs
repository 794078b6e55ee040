//! CLI error types with miette diagnostics.
//!
//! Maps core and config errors into user-facing errors with help text.

use miette::Diagnostic;
use thiserror::Error;

use dustloop_config::ConfigError;
use dustloop_core::{CoreError, LookupError};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Remote data ─────────────────────────────────────────────────

    #[error("Could not fetch move data: {message}")]
    #[diagnostic(
        code(dustloop::fetch_failed),
        help("Check your connection and the wiki endpoint (--endpoint or data.endpoint).")
    )]
    FetchFailed { message: String },

    // ── Lookups ─────────────────────────────────────────────────────

    #[error("{0}")]
    #[diagnostic(
        code(dustloop::not_found),
        help("Run: dustloop characters to see valid character aliases")
    )]
    Lookup(#[from] LookupError),

    // ── Snapshot ────────────────────────────────────────────────────

    #[error("Snapshot file problem: {message}")]
    #[diagnostic(
        code(dustloop::snapshot),
        help("Delete the snapshot or point --cache-file somewhere writable.")
    )]
    Snapshot { message: String },

    // ── Configuration ───────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(dustloop::validation))]
    Validation { field: String, reason: String },

    #[error(transparent)]
    #[diagnostic(code(dustloop::config))]
    Config(ConfigError),

    // ── IO / Serialization ──────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(dustloop::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FetchFailed { .. } => exit_code::CONNECTION,
            Self::Lookup(_) => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::Config(_) => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Conversions ──────────────────────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::FetchFailed { message, .. } => Self::FetchFailed { message },
            CoreError::Config { message } => Self::Validation {
                field: "data.endpoint".into(),
                reason: message,
            },
            err @ (CoreError::SnapshotIo { .. } | CoreError::SnapshotFormat { .. }) => {
                Self::Snapshot {
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(other),
        }
    }
}
