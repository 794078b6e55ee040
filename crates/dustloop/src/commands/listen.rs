//! Chat bridge over stdin/stdout.
//!
//! Each input line is `channel<TAB>message`, or a bare message for the
//! default channel. Every reply is printed on its own line; messages that
//! are not commands produce nothing.

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use dustloop_config::Config;
use dustloop_core::{FrameDataService, MessageHandler};

use crate::cli::ListenArgs;
use crate::error::CliError;
use crate::output;

pub async fn handle(
    service: FrameDataService,
    args: &ListenArgs,
    cfg: &Config,
) -> Result<(), CliError> {
    let default_channel = args
        .channel
        .clone()
        .or_else(|| cfg.chat.channels.first().cloned())
        .unwrap_or_default();

    let handler = MessageHandler::new(service)
        .with_prefixes(cfg.chat.prefixes.clone())
        .with_channels(cfg.chat.channels.clone());
    info!(channel = %default_channel, "listening for frame data commands on stdin");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let (channel, message) = split_line(&line, &default_channel);
        if let Some(reply) = handler.handle(channel, message).await {
            debug!(channel, message, reply = %reply, "answered");
            output::print_output(&reply)?;
        }
    }

    Ok(())
}

/// Split `channel<TAB>message`; a line without a tab belongs to `default`.
fn split_line<'a>(line: &'a str, default: &'a str) -> (&'a str, &'a str) {
    line.split_once('\t').unwrap_or((default, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_separates_channel() {
        assert_eq!(
            split_line("#orctamer\t!fd SO 5K damage", "lobby"),
            ("#orctamer", "!fd SO 5K damage")
        );
    }

    #[test]
    fn bare_lines_use_default_channel() {
        assert_eq!(split_line("!fd SO 5K damage", "lobby"), ("lobby", "!fd SO 5K damage"));
    }
}
