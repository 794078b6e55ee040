//! Effective configuration: file + environment, then command-line flags.

use dustloop_config::Config;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Load the config file and apply flag overrides (flag > env > file).
pub fn effective_config(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut cfg = dustloop_config::load_config(global.config.as_deref())?;

    if let Some(endpoint) = &global.endpoint {
        cfg.data.endpoint.clone_from(endpoint);
    }
    if let Some(cache_file) = &global.cache_file {
        cfg.data.cache_file = Some(cache_file.clone());
    }
    if let Some(ttl) = global.ttl {
        cfg.data.ttl_secs = ttl;
    }

    Ok(cfg)
}
