//! Command dispatch: bridges CLI args -> core service -> output formatting.

pub mod ask;
pub mod characters;
pub mod config_cmd;
pub mod listen;
pub mod refresh;

use dustloop_config::Config;
use dustloop_core::{DataStore, FrameDataService};

use crate::cli::Command;
use crate::error::CliError;

/// Dispatch a parsed command to its handler.
pub async fn dispatch(cmd: Command, cfg: &Config) -> Result<(), CliError> {
    match cmd {
        // These never touch move data.
        Command::Characters(args) => characters::handle(&args),
        Command::Config(args) => config_cmd::handle(&args, cfg),

        Command::Ask(args) => ask::handle(&open_service(cfg).await?, &args).await,
        Command::Listen(args) => listen::handle(open_service(cfg).await?, &args, cfg).await,
        Command::Refresh => refresh::handle(&open_service(cfg).await?).await,
    }
}

/// Open the data store described by `cfg` and wrap it in the query service.
async fn open_service(cfg: &Config) -> Result<FrameDataService, CliError> {
    let store = DataStore::open(&cfg.store_config()?).await?;
    Ok(FrameDataService::new(store))
}
