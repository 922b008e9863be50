//! Platform-agnostic command handlers.
//!
//! Each handler produces the reply text for one chat command. Handlers
//! never surface raw errors to the chat: node failures are logged and
//! replaced with a fixed fallback reply, and the price report degrades
//! to its no-data marker on total upstream failure.

use tracing::warn;

use crate::bot::command::{command_help, ChatCommand};
use crate::context::AppContext;
use crate::node::{masternode_count, NodeQuery};
use crate::price::aggregate;

/// Fallback reply when a node query fails.
pub const NODE_UNAVAILABLE_REPLY: &str = "Chain data temporarily unavailable.";

/// Route one parsed command to its handler and return the reply text.
pub async fn dispatch(ctx: &AppContext, command: ChatCommand) -> String {
    match command {
        ChatCommand::Start => start_reply().to_string(),
        ChatCommand::Help => command_help().to_string(),
        ChatCommand::Settings => settings_reply().to_string(),
        ChatCommand::Diff => diff_reply(ctx).await,
        ChatCommand::Height => height_reply(ctx).await,
        ChatCommand::MnCount => mncount_reply(ctx).await,
        ChatCommand::Price => price_reply(ctx).await,
    }
}

#[must_use]
pub const fn start_reply() -> &'static str {
    "ThoughtBot is listening."
}

#[must_use]
pub const fn settings_reply() -> &'static str {
    "ThoughtBot is using default settings."
}

pub async fn diff_reply(ctx: &AppContext) -> String {
    match ctx.node.run(NodeQuery::Difficulty.subcommand()).await {
        Ok(output) => format!("Difficulty: {}\n", output.trim()),
        Err(err) => {
            warn!(error = %err, "difficulty query failed");
            NODE_UNAVAILABLE_REPLY.to_string()
        }
    }
}

pub async fn height_reply(ctx: &AppContext) -> String {
    match ctx.node.run(NodeQuery::Height.subcommand()).await {
        Ok(output) => format!("Height: {}\n", output.trim()),
        Err(err) => {
            warn!(error = %err, "height query failed");
            NODE_UNAVAILABLE_REPLY.to_string()
        }
    }
}

pub async fn mncount_reply(ctx: &AppContext) -> String {
    match masternode_count(ctx.node.as_ref()).await {
        Ok(count) => format!("Masternode Count: {count}\n"),
        Err(err) => {
            warn!(error = %err, "masternode count query failed");
            NODE_UNAVAILABLE_REPLY.to_string()
        }
    }
}

/// Assemble the price report. Infallible: source failures degrade the
/// report rather than erroring the handler.
pub async fn price_reply(ctx: &AppContext) -> String {
    aggregate(&ctx.price_sources).await.render()
}
