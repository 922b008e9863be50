//! Chat command parsing, shared by both front ends.

/// The commands users can issue in chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatCommand {
    Start,
    Help,
    Settings,
    Diff,
    Height,
    MnCount,
    Price,
}

impl ChatCommand {
    /// Look up a command by its bare name (no leading slash).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "start" => Some(Self::Start),
            "help" => Some(Self::Help),
            "settings" => Some(Self::Settings),
            "diff" => Some(Self::Diff),
            "height" => Some(Self::Height),
            "mncount" => Some(Self::MnCount),
            "price" => Some(Self::Price),
            _ => None,
        }
    }
}

/// Parse error for chat command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a chat message into a bot command.
///
/// Accepts `/cmd` and the `/cmd@bot_name` form Telegram uses in group
/// chats. Trailing arguments are ignored; no command takes any.
pub fn parse_command(text: &str) -> Result<ChatCommand, CommandParseError> {
    let Some(raw_command) = text.split_whitespace().next() else {
        return Err(CommandParseError::NotACommand);
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head);

    ChatCommand::from_name(&command[1..])
        .ok_or_else(|| CommandParseError::UnknownCommand(command.to_string()))
}

/// Help text returned by `/help`.
#[must_use]
pub const fn command_help() -> &'static str {
    "ThoughtBot help:\n\
    /start    - Initialize ThoughtBot\n\
    /help     - Show this help\n\
    /settings - Show bot settings\n\
    /diff     - Show current THT network difficulty\n\
    /height   - Show the current height of the THT blockchain\n\
    /mncount  - Show the current number of masternodes on the THT blockchain\n\
    /price    - Show current price listings for THT"
}

/// Bot commands for platform menu registration.
///
/// Returns tuples of (command, description), used for Telegram's
/// `set_my_commands` and Discord's slash command registration.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("start", "Initialize ThoughtBot"),
        ("help", "Show all commands"),
        ("settings", "Show bot settings"),
        ("diff", "Get current chain difficulty"),
        ("height", "Get current chain height"),
        ("mncount", "Get the current number of masternodes"),
        ("price", "Get current exchange prices for THT"),
    ]
}
