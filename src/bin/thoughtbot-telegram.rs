use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing::info;

use thoughtbot::bot::telegram;
use thoughtbot::config::{Config, DEFAULT_CONFIG_PATH};
use thoughtbot::context::AppContext;

/// Telegram front end for ThoughtBot.
#[derive(Parser)]
#[command(name = "thoughtbot-telegram", version, about)]
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

    let token = match config.telegram.token() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Telegram front end not configured: {e}");
            std::process::exit(1);
        }
    };

    info!("thoughtbot telegram front end starting");

    let app = Arc::new(AppContext::new(&config));
    let allowed_chat_ids = config.telegram.allowed_chat_ids.clone();

    tokio::select! {
        () = telegram::run(token, allowed_chat_ids, app) => {}
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("thoughtbot telegram front end stopped");
}
