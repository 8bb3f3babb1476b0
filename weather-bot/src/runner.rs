//! Entry points: run the live bot, or perform a single lookup for the `check` command.

use anyhow::Result;
use tracing::{info, instrument};
use weather_client::{OpenWeatherClient, WeatherProvider};
use weather_core::init_tracing;
use weather_telegram::run_repl;

use crate::components::build_bot_components;
use crate::config::BotConfig;
use crate::formatter;

/// Main entry: validate config, init logging, build components, then long-poll until Ctrl-C.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        weather_api_url = %config.weather_api_url,
        mode = ?config.weather_mode(),
        photo_enabled = config.photo_url.is_some(),
        "Initializing bot"
    );

    let components = build_bot_components(&config)?;
    info!(commands = ?components.dispatcher.commands().names(), "Bot started successfully");

    run_repl(components.teloxide_bot, components.handler_chain).await
}

/// One weather lookup with the configured client; returns the reply text a chat would receive.
pub async fn check_city(config: &BotConfig, city: &str) -> Result<String> {
    let client = OpenWeatherClient::new(config.weather_client_config())?;
    match client.fetch(city).await {
        Ok(reading) => Ok(formatter::render(city, &reading)),
        Err(e) => Err(anyhow::anyhow!("{} ({})", e.user_message(), e)),
    }
}
