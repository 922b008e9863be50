//! ThoughtBot - chat front ends for querying the Thought blockchain.
//!
//! Two bots (Telegram and Discord) expose the same command surface:
//! node queries answered by shelling out to `thought-cli`, and a price
//! report aggregated from independent ticker APIs with partial-failure
//! tolerance.
//!
//! # Modules
//!
//! - [`config`] - TOML configuration with env fallback for secrets
//! - [`context`] - explicit application context passed to handlers
//! - [`error`] - error types for the crate
//! - [`node`] - node CLI query adapter
//! - [`price`] - price sources and report aggregation
//! - [`handlers`] - platform-agnostic command handlers
//! - [`bot`] - the chat front ends (feature-gated per platform)
//!
//! # Features
//!
//! - `telegram` - Telegram front end via teloxide (default)
//! - `discord` - Discord front end via serenity (default)

pub mod bot;
pub mod config;
pub mod context;
pub mod error;
pub mod handlers;
pub mod node;
pub mod price;

pub use error::{Error, Result};
