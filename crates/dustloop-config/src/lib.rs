//! Configuration for the dustloop binary.
//!
//! Layers built-in defaults, a TOML file and `DUSTLOOP_` environment
//! variables, then translates the result into `dustloop_core::StoreConfig`.
//! Core never reads config files itself.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use dustloop_core::StoreConfig;
use dustloop_core::chat::DEFAULT_PREFIXES;

/// Environment variable prefix. Nested keys are separated by `__`, so
/// `DUSTLOOP_DATA__TTL_SECS` sets `data.ttl_secs`.
pub const ENV_PREFIX: &str = "DUSTLOOP_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Where move data comes from and how long it is kept.
    #[serde(default)]
    pub data: DataConfig,

    /// Chat command settings.
    #[serde(default)]
    pub chat: ChatConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DataConfig {
    /// MediaWiki `index.php` serving the Cargo export.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Snapshot file. Defaults to the platform cache directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_file: Option<PathBuf>,

    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            cache_file: None,
            ttl_secs: default_ttl_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    dustloop_api::DEFAULT_ENDPOINT.into()
}
fn default_ttl_secs() -> u64 {
    dustloop_core::config::DEFAULT_TTL.as_secs()
}
fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatConfig {
    /// Message prefixes that mark a frame-data command.
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,

    /// Channels to answer in. Empty answers everywhere.
    #[serde(default)]
    pub channels: Vec<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            prefixes: default_prefixes(),
            channels: Vec::new(),
        }
    }
}

fn default_prefixes() -> Vec<String> {
    DEFAULT_PREFIXES.map(String::from).to_vec()
}

// ── Paths ───────────────────────────────────────────────────────────

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "dustloop", "dustloop")
}

fn dirs_fallback(kind: &str) -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(kind);
    p.push("dustloop");
    p
}

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    project_dirs().map_or_else(
        || dirs_fallback(".config").join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Default snapshot location in the platform cache directory.
pub fn default_cache_file() -> PathBuf {
    project_dirs().map_or_else(
        || dirs_fallback(".cache").join("moves.json"),
        |dirs| dirs.cache_dir().join("moves.json"),
    )
}

// ── Loading ─────────────────────────────────────────────────────────

/// The provider stack: defaults, then the TOML file, then environment.
pub fn figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Load config from `path`, or from [`config_path`] when `None`.
///
/// An explicit path must exist; the default path is optional.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match path {
        Some(p) if !p.exists() => return Err(ConfigError::NotFound(p.to_path_buf())),
        Some(p) => p.to_path_buf(),
        None => config_path(),
    };

    Ok(figment(&path).extract()?)
}

// ── Translation ─────────────────────────────────────────────────────

impl Config {
    /// Snapshot file, falling back to [`default_cache_file`].
    pub fn cache_file(&self) -> PathBuf {
        self.data.cache_file.clone().unwrap_or_else(default_cache_file)
    }

    /// Build the runtime store configuration.
    pub fn store_config(&self) -> Result<StoreConfig, ConfigError> {
        let endpoint: Url = self
            .data
            .endpoint
            .parse()
            .map_err(|e| ConfigError::Validation {
                field: "data.endpoint".into(),
                reason: format!("{e}: {}", self.data.endpoint),
            })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::Validation {
                field: "data.endpoint".into(),
                reason: format!("expected an http(s) URL, got '{endpoint}'"),
            });
        }
        if self.data.timeout_secs == 0 {
            return Err(ConfigError::Validation {
                field: "data.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }

        Ok(StoreConfig::new(endpoint, self.cache_file())
            .with_ttl(Duration::from_secs(self.data.ttl_secs))
            .with_timeout(Duration::from_secs(self.data.timeout_secs)))
    }

    /// Render as TOML, the same shape `load_config` reads.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
