//! Telegram front end.
//!
//! Long-polling listener that registers the command menu, filters
//! unauthorized chats and routes commands to the shared handlers.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{error, info, warn};

use crate::context::AppContext;
use crate::handlers;

use super::command::{bot_commands, command_help, parse_command, CommandParseError};

/// Run the Telegram listener until the process is stopped.
///
/// An empty `allowed_chat_ids` list means commands are accepted from
/// any chat.
pub async fn run(token: String, allowed_chat_ids: Vec<i64>, app: Arc<AppContext>) {
    let bot = Bot::new(&token);

    // Register commands with Telegram so they appear in the "/" menu.
    if let Err(e) = register_bot_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands with Telegram");
    }

    info!("Telegram command listener started");

    let allowed_chat_ids = Arc::new(allowed_chat_ids);

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let app = app.clone();
        let allowed_chat_ids = allowed_chat_ids.clone();
        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };

            if !is_authorized_chat(msg.chat.id, &allowed_chat_ids) {
                return respond(());
            }

            let reply = match parse_command(text) {
                Ok(command) => handlers::dispatch(&app, command).await,
                Err(CommandParseError::NotACommand) => return respond(()),
                Err(err) => format!("Invalid command: {err}\n\n{}", command_help()),
            };

            if let Err(e) = bot.send_message(msg.chat.id, reply).await {
                error!(error = %e, "Failed to send Telegram reply");
            }

            respond(())
        }
    })
    .await;
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}

/// Check if a chat is allowed to issue commands.
fn is_authorized_chat(incoming_chat: ChatId, allowed_chat_ids: &[i64]) -> bool {
    if allowed_chat_ids.is_empty() || allowed_chat_ids.contains(&incoming_chat.0) {
        return true;
    }

    warn!(
        chat_id = incoming_chat.0,
        "Ignoring Telegram message from unauthorized chat"
    );
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_allow_list_accepts_any_chat() {
        assert!(is_authorized_chat(ChatId(12345), &[]));
        assert!(is_authorized_chat(ChatId(-100), &[]));
    }

    #[test]
    fn allow_list_filters_chats() {
        let allowed = [42, -1001234];
        assert!(is_authorized_chat(ChatId(42), &allowed));
        assert!(is_authorized_chat(ChatId(-1001234), &allowed));
        assert!(!is_authorized_chat(ChatId(43), &allowed));
    }
}
