//! Transport config: bot token and optional Bot API URL.
//! Loaded from BOT_TOKEN and TELEGRAM_API_URL / TELOXIDE_API_URL.

use anyhow::Result;
use std::env;
use tracing::error;

/// Telegram connection settings.
#[derive(Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    /// Overrides the Bot API base URL (used to point at a mock server in tests).
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from the environment. `token` overrides BOT_TOKEN; a missing or malformed token is an error.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let config = Self {
            bot_token,
            telegram_api_url,
        };
        config.validate()?;
        Ok(config)
    }

    /// Uses the given token; no API URL override.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    /// Token must look like `<bot id>:<secret>`; the API URL, if set, must parse.
    pub fn validate(&self) -> Result<()> {
        let token = self.bot_token.trim();
        match token.split_once(':') {
            Some((id, secret)) if !id.is_empty() && !secret.is_empty() && !token.contains(char::is_whitespace) => {}
            _ => anyhow::bail!("BOT_TOKEN is malformed (expected <bot id>:<secret>)"),
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Builds the teloxide Bot, applying the API URL override when present.
    pub fn build_bot(&self) -> teloxide::Bot {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.telegram_api_url.as_deref() {
            Some(url_str) => match reqwest::Url::parse(url_str) {
                Ok(url) => bot.set_api_url(url),
                Err(e) => {
                    error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                    bot
                }
            },
            None => bot,
        }
    }
}
