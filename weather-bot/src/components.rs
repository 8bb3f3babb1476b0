//! Component factory: builds clients, dispatcher, and handler chain from config. Isolates assembly from the runner.

use std::sync::Arc;

use anyhow::{Context, Result};
use handler_chain::HandlerChain;
use tracing::{info, instrument};
use weather_client::{HttpImageSource, ImageSource, OpenWeatherClient, WeatherProvider};
use weather_core::Bot;
use weather_telegram::TelegramBotAdapter;

use crate::config::BotConfig;
use crate::dispatcher::Dispatcher;
use crate::handlers::{DispatchHandler, LoggingHandler};

/// Everything the runner needs.
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub dispatcher: Arc<Dispatcher>,
    pub handler_chain: HandlerChain,
}

/// Builds the dispatcher from config: weather client, mode, and `/photo` when PHOTO_URL is set.
#[instrument(skip(config))]
pub fn build_dispatcher(config: &BotConfig) -> Result<Dispatcher> {
    let weather: Arc<dyn WeatherProvider> = Arc::new(
        OpenWeatherClient::new(config.weather_client_config())
            .context("Failed to build weather client")?,
    );
    let mode = config.weather_mode();
    info!(mode = ?mode, lang = %config.weather_lang, "Weather client ready");

    let mut dispatcher = Dispatcher::new(weather, mode);
    if let Some(ref url) = config.photo_url {
        let images: Arc<dyn ImageSource> = Arc::new(
            HttpImageSource::new(url.clone(), config.http_timeout())
                .context("Failed to build image client")?,
        );
        info!(url = %url, "Photo command enabled");
        dispatcher = dispatcher.with_image_source(images);
    }
    Ok(dispatcher)
}

/// Builds the handler chain: logging, then dispatch.
pub fn build_handler_chain(dispatcher: Arc<Dispatcher>, bot: Arc<dyn Bot>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(DispatchHandler::new(dispatcher, bot)))
}

/// Builds all components for the live Telegram bot.
#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = config.telegram.build_bot();
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let dispatcher = Arc::new(build_dispatcher(config)?);
    let handler_chain = build_handler_chain(dispatcher.clone(), bot);
    Ok(BotComponents {
        teloxide_bot,
        dispatcher,
        handler_chain,
    })
}
