//! Discord front end.
//!
//! Gateway client that registers the command surface as guild slash
//! commands and routes interactions to the shared handlers. The
//! `/price` interaction is deferred first, since the upstream ticker
//! calls can take longer than Discord's initial response window, and
//! the report is delivered as a code-block followup.

use std::sync::Arc;

use serenity::all::{
    Client, CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, EventHandler,
    GatewayIntents, GuildId, Interaction, Ready,
};
use serenity::async_trait;
use tracing::{error, info, warn};

use crate::bot::command::{bot_commands, ChatCommand};
use crate::context::AppContext;
use crate::error::Result;
use crate::handlers;

struct Handler {
    guild_id: GuildId,
    app: Arc<AppContext>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, "Discord gateway connected");

        let commands: Vec<CreateCommand> = bot_commands()
            .into_iter()
            .map(|(name, description)| CreateCommand::new(name).description(description))
            .collect();

        match self.guild_id.set_commands(&ctx.http, commands).await {
            Ok(registered) => {
                info!(count = registered.len(), "Registered Discord slash commands");
            }
            Err(e) => error!(error = %e, "Failed to register Discord slash commands"),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        let Some(chat_command) = ChatCommand::from_name(&command.data.name) else {
            warn!(name = %command.data.name, "Unknown Discord command interaction");
            return;
        };

        match chat_command {
            ChatCommand::Price => self.respond_deferred(&ctx, &command).await,
            other => {
                let reply = handlers::dispatch(&self.app, other).await;
                let response = CreateInteractionResponse::Message(
                    CreateInteractionResponseMessage::new().content(reply),
                );
                if let Err(e) = command.create_response(&ctx.http, response).await {
                    error!(error = %e, "Failed to send Discord reply");
                }
            }
        }
    }
}

impl Handler {
    /// Acknowledge first, then send the price report as a followup.
    async fn respond_deferred(&self, ctx: &Context, command: &CommandInteraction) {
        if let Err(e) = command.defer(&ctx.http).await {
            error!(error = %e, "Failed to defer Discord interaction");
            return;
        }

        let report = handlers::price_reply(&self.app).await;
        let followup =
            CreateInteractionResponseFollowup::new().content(format!("```{report}```"));

        if let Err(e) = command.create_followup(&ctx.http, followup).await {
            error!(error = %e, "Failed to send Discord price followup");
        }
    }
}

/// Run the Discord gateway client until the process is stopped.
pub async fn run(token: String, guild_id: u64, app: Arc<AppContext>) -> Result<()> {
    let handler = Handler {
        guild_id: GuildId::new(guild_id),
        app,
    };

    // Slash command interactions arrive regardless of gateway intents.
    let mut client = Client::builder(&token, GatewayIntents::empty())
        .event_handler(handler)
        .await?;

    client.start().await?;
    Ok(())
}
