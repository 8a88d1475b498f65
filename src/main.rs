mod command;
mod config;
mod engine;
mod handlers;
mod models;
mod registry;
mod texts;

use std::sync::Arc;

use teloxide::prelude::*;
use tokio::sync::Mutex as TokioMutex;

use config::Config;
use registry::Registry;

/// The single serialization point for all pairing state.
pub type SharedRegistry = Arc<TokioMutex<Registry>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    pretty_env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };

    log::info!(
        "Starting bot (onboarding {})...",
        if config.onboarding_enabled {
            "enabled"
        } else {
            "disabled"
        }
    );

    let bot = Bot::new(config.token.clone());
    let registry: SharedRegistry =
        Arc::new(TokioMutex::new(Registry::new(config.onboarding_enabled)));

    Dispatcher::builder(bot, handlers::schema())
        .dependencies(dptree::deps![registry])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Bot stopped, discarding all sessions");
}
