use anyhow::{Context, Result};
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use movie_browser_bot::bot;
use movie_browser_bot::catalog::TmdbClient;
use movie_browser_bot::config::BotConfig;
use movie_browser_bot::localization::init_localization;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT")
        .map(|value| value.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    init_tracing();

    info!("Starting Movie Browser Telegram Bot");

    let config = BotConfig::from_env().context("Failed to load configuration")?;
    init_localization()?;

    let catalog = Arc::new(
        TmdbClient::new(config.tmdb_api_key.clone(), &config.catalog)
            .context("Failed to build catalog client")?,
    );
    let catalog_config = Arc::new(config.catalog.clone());

    info!(
        api_base_url = %catalog_config.api_base_url,
        timeout_secs = catalog_config.request_timeout_secs,
        result_count = catalog_config.result_count,
        "Catalog client initialized"
    );

    // Initialize the bot
    let bot = Bot::new(config.bot_token);

    info!("Bot initialized, starting dispatcher");

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(bot::message_handler))
        .branch(Update::filter_callback_query().endpoint({
            let catalog = Arc::clone(&catalog);
            let catalog_config = Arc::clone(&catalog_config);
            move |bot: Bot, q: CallbackQuery| {
                let catalog = Arc::clone(&catalog);
                let catalog_config = Arc::clone(&catalog_config);
                async move { bot::callback_handler(bot, q, catalog, catalog_config).await }
            }
        }));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
