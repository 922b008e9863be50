use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing::{error, info};

use thoughtbot::bot::discord;
use thoughtbot::config::{Config, DEFAULT_CONFIG_PATH};
use thoughtbot::context::AppContext;

/// Discord front end for ThoughtBot.
#[derive(Parser)]
#[command(name = "thoughtbot-discord", version, about)]
struct Args {
    /// Path to the config file.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.logging.init();

    let (token, guild_id) = match (config.discord.token(), config.discord.guild_id()) {
        (Ok(token), Ok(guild_id)) => (token, guild_id),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Discord front end not configured: {e}");
            std::process::exit(1);
        }
    };

    info!("thoughtbot discord front end starting");

    let app = Arc::new(AppContext::new(&config));

    tokio::select! {
        result = discord::run(token, guild_id, app) => {
            if let Err(e) = result {
                error!(error = %e, "Fatal error");
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("thoughtbot discord front end stopped");
}
