//! Configuration loading from a TOML file.
//!
//! Secrets (bot tokens) may live in the config file or come from the
//! environment (`TELEGRAM_BOT_TOKEN`, `DISCORD_BOT_TOKEN`), which plays
//! well with a `.env` file loaded via `dotenvy` at startup.

use std::path::Path;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::ConfigError;

/// Default config file path, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "thoughtbot.toml";

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub node: NodeConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub discord: DiscordConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Node CLI settings.
#[derive(Debug, Deserialize)]
pub struct NodeConfig {
    /// Path to the node's command-line client.
    #[serde(default = "default_cli_path")]
    pub cli_path: String,
}

fn default_cli_path() -> String {
    "thought-cli".into()
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            cli_path: default_cli_path(),
        }
    }
}

/// Telegram front-end settings.
#[derive(Debug, Deserialize, Default)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather. Falls back to the
    /// `TELEGRAM_BOT_TOKEN` environment variable.
    pub token: Option<String>,
    /// Chat ids allowed to issue commands. Empty means any chat.
    #[serde(default)]
    pub allowed_chat_ids: Vec<i64>,
}

impl TelegramConfig {
    pub fn token(&self) -> Result<String, ConfigError> {
        self.token
            .clone()
            .or_else(|| std::env::var("TELEGRAM_BOT_TOKEN").ok())
            .ok_or(ConfigError::MissingField {
                field: "telegram.token",
            })
    }
}

/// Discord front-end settings.
#[derive(Debug, Deserialize, Default)]
pub struct DiscordConfig {
    /// Bot token from the Discord developer portal. Falls back to the
    /// `DISCORD_BOT_TOKEN` environment variable.
    pub token: Option<String>,
    /// Guild to register the slash commands in.
    #[serde(default)]
    pub guild_id: u64,
}

impl DiscordConfig {
    pub fn token(&self) -> Result<String, ConfigError> {
        self.token
            .clone()
            .or_else(|| std::env::var("DISCORD_BOT_TOKEN").ok())
            .ok_or(ConfigError::MissingField {
                field: "discord.token",
            })
    }

    pub fn guild_id(&self) -> Result<u64, ConfigError> {
        if self.guild_id == 0 {
            return Err(ConfigError::MissingField {
                field: "discord.guild_id",
            });
        }
        Ok(self.guild_id)
    }
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.node.cli_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "node.cli_path",
                reason: "cannot be empty".into(),
            });
        }
        Ok(())
    }
}
