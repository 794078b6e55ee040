//! Clap derive structures for the `dustloop` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// dustloop -- Guilty Gear Strive frame data from the Dustloop wiki
#[derive(Debug, Parser)]
#[command(
    name = "dustloop",
    version,
    about = "Look up Guilty Gear Strive frame data from the Dustloop wiki",
    long_about = "Answers `character move property` questions from the Dustloop wiki's\n\
        move table. Data is cached locally and refetched once it is older\n\
        than the configured TTL.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file (defaults to the platform config directory)
    #[arg(long, env = "DUSTLOOP_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Snapshot file holding the last fetched move data
    #[arg(long, global = true)]
    pub cache_file: Option<PathBuf>,

    /// Seconds fetched data stays fresh
    #[arg(long, global = true)]
    pub ttl: Option<u64>,

    /// Wiki `index.php` endpoint
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// One value per line (scripting)
    Plain,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Answer one frame data question
    #[command(alias = "fd")]
    Ask(AskArgs),

    /// Answer `!framedata` commands read from stdin
    Listen(ListenArgs),

    /// Fetch move data now and update the snapshot
    Refresh,

    /// List the character roster and aliases
    #[command(alias = "chars")]
    Characters(CharactersArgs),

    /// Inspect the effective configuration
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct AskArgs {
    /// Character alias or name (e.g. SO, sol, "Sol Badguy")
    pub character: String,

    /// Move input or name (e.g. 5K, "gun flame")
    #[arg(value_name = "MOVE")]
    pub move_query: String,

    /// Property to read (e.g. damage, startup, onBlock)
    pub property: String,
}

#[derive(Debug, Args)]
pub struct ListenArgs {
    /// Channel for lines without a `channel<TAB>` prefix
    #[arg(long, short = 'c')]
    pub channel: Option<String>,
}

#[derive(Debug, Args)]
pub struct CharactersArgs {
    /// Output format
    #[arg(long, short = 'o', default_value = "table")]
    pub output: OutputFormat,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
}
