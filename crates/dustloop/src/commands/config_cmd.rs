//! Config inspection: `config show` and `config path`.

use dustloop_config::Config;

use crate::cli::{ConfigArgs, ConfigCommand};
use crate::error::CliError;
use crate::output;

pub fn handle(args: &ConfigArgs, cfg: &Config) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let mut shown = cfg.clone();
            shown.data.cache_file = Some(cfg.cache_file());
            output::print_output(shown.to_toml()?.trim_end())
        }
        ConfigCommand::Path => {
            output::print_output(&dustloop_config::config_path().display().to_string())
        }
    }
}
