// ── Chat command handling ──
//
// Recognizes `!framedata` / `!fd` messages, splits them into parameters
// and routes them to the `FrameDataService`. The chat connection itself
// lives outside this crate; it hands in `(channel, text)` and sends back
// whatever reply comes out.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::facade::FrameDataService;

/// Command prefixes recognized out of the box.
pub const DEFAULT_PREFIXES: [&str; 2] = ["!framedata", "!fd"];

/// Reply for a command with missing parameters.
pub const USAGE: &str = "To retrieve character frame data, use the command: !framedata or !fd \
    \"character alias/name\" \"move name\" \"property\". For example, you can type: \
    !framedata SO 5K damage or !fd AS 2D startup.";

static PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)"|\S+"#).expect("parameter pattern is valid"));

/// Split a message into parameters. `"quoted words"` stay together; stray
/// quotes inside bare words are dropped.
pub fn tokenize(message: &str) -> Vec<String> {
    PARAM
        .captures_iter(message)
        .map(|caps| match caps.get(1) {
            Some(quoted) => quoted.as_str().to_owned(),
            None => caps[0].replace('"', ""),
        })
        .collect()
}

/// A recognized frame-data command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// Prefix matched but fewer than three arguments followed.
    Usage,
    Lookup {
        character: String,
        move_query: String,
        property: String,
    },
}

impl ChatCommand {
    /// Parse a message. `None` when it does not start with a prefix.
    pub fn parse<S: AsRef<str>>(message: &str, prefixes: &[S]) -> Option<Self> {
        let trimmed = message.trim();
        if !prefixes.iter().any(|p| trimmed.starts_with(p.as_ref())) {
            return None;
        }

        let mut params = tokenize(trimmed).into_iter().skip(1);
        match (params.next(), params.next(), params.next()) {
            (Some(character), Some(move_query), Some(property)) => Some(Self::Lookup {
                character,
                move_query,
                property,
            }),
            _ => Some(Self::Usage),
        }
    }
}

/// Turns incoming chat messages into replies.
pub struct MessageHandler {
    service: FrameDataService,
    prefixes: Vec<String>,
    channels: Vec<String>,
}

impl MessageHandler {
    /// Handler with the default prefixes, answering in every channel.
    pub fn new(service: FrameDataService) -> Self {
        Self {
            service,
            prefixes: DEFAULT_PREFIXES.map(String::from).to_vec(),
            channels: Vec::new(),
        }
    }

    pub fn with_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.prefixes = prefixes;
        self
    }

    /// Restrict replies to these channels. Empty means all channels.
    pub fn with_channels(mut self, channels: Vec<String>) -> Self {
        self.channels = channels.into_iter().map(|c| channel_key(&c)).collect();
        self
    }

    /// Reply to one message, or `None` when it is not for us.
    pub async fn handle(&self, channel: &str, message: &str) -> Option<String> {
        if !self.listens_on(channel) {
            return None;
        }

        match ChatCommand::parse(message, self.prefixes.as_slice())? {
            ChatCommand::Usage => {
                debug!(channel, "incomplete frame data command");
                Some(USAGE.to_owned())
            }
            ChatCommand::Lookup {
                character,
                move_query,
                property,
            } => Some(
                self.service
                    .answer(&character, &move_query, &property)
                    .await,
            ),
        }
    }

    fn listens_on(&self, channel: &str) -> bool {
        self.channels.is_empty() || self.channels.contains(&channel_key(channel))
    }
}

/// `#Channel` and `channel` name the same channel.
fn channel_key(channel: &str) -> String {
    channel.trim().trim_start_matches('#').to_lowercase()
}
