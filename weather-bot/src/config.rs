//! Bot configuration, loaded from the environment (call `dotenvy::dotenv()` first to honour `.env`).
//!
//! Required: BOT_TOKEN (or `--token`), WEATHER_API_KEY. Everything else has a default.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use weather_client::{OpenWeatherConfig, DEFAULT_BASE_URL};
use weather_telegram::TelegramConfig;

use crate::commands::WeatherMode;

const DEFAULT_LANG: &str = "en";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LOG_FILE: &str = "logs/weather-bot.log";

/// Full bot configuration.
#[derive(Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    /// WEATHER_API_KEY
    pub weather_api_key: String,
    /// WEATHER_API_URL; scheme and host of the provider.
    pub weather_api_url: String,
    /// WEATHER_LANG; language for condition descriptions.
    pub weather_lang: String,
    /// WEATHER_TIMEOUT_SECS; applies to weather and image requests.
    pub http_timeout_secs: u64,
    /// WEATHER_FIXED_CITY; when set, /weather answers for this city without asking.
    pub fixed_city: Option<String>,
    /// PHOTO_URL; when set, /photo is registered and serves this image.
    pub photo_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
}

impl BotConfig {
    /// Loads from the environment. `token` overrides BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let weather_api_key =
            env::var("WEATHER_API_KEY").context("WEATHER_API_KEY not set")?;
        let weather_api_url =
            env::var("WEATHER_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let weather_lang = env::var("WEATHER_LANG").unwrap_or_else(|_| DEFAULT_LANG.to_string());
        let http_timeout_secs = match env::var("WEATHER_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("WEATHER_TIMEOUT_SECS is not a number: {}", raw))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        let fixed_city = non_empty_var("WEATHER_FIXED_CITY");
        let photo_url = non_empty_var("PHOTO_URL");
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        let config = Self {
            telegram,
            weather_api_key,
            weather_api_url,
            weather_lang,
            http_timeout_secs,
            fixed_city,
            photo_url,
            log_file,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects malformed values; errors never echo the API key.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if self.weather_api_key.trim().is_empty() {
            anyhow::bail!("WEATHER_API_KEY is empty");
        }
        if self.weather_api_key.contains(char::is_whitespace) {
            anyhow::bail!("WEATHER_API_KEY is malformed (contains whitespace)");
        }
        if reqwest::Url::parse(&self.weather_api_url).is_err() {
            anyhow::bail!("WEATHER_API_URL is not a valid URL: {}", self.weather_api_url);
        }
        if let Some(ref url) = self.photo_url {
            if reqwest::Url::parse(url).is_err() {
                anyhow::bail!("PHOTO_URL is not a valid URL: {}", url);
            }
        }
        if self.http_timeout_secs == 0 {
            anyhow::bail!("WEATHER_TIMEOUT_SECS must be greater than zero");
        }
        Ok(())
    }

    pub fn weather_mode(&self) -> WeatherMode {
        match &self.fixed_city {
            Some(city) => WeatherMode::FixedCity(city.clone()),
            None => WeatherMode::PromptForCity,
        }
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn weather_client_config(&self) -> OpenWeatherConfig {
        OpenWeatherConfig::new(self.weather_api_key.clone())
            .with_base_url(self.weather_api_url.clone())
            .with_lang(self.weather_lang.clone())
            .with_timeout(self.http_timeout())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "BOT_TOKEN",
        "TELEGRAM_API_URL",
        "TELOXIDE_API_URL",
        "WEATHER_API_KEY",
        "WEATHER_API_URL",
        "WEATHER_LANG",
        "WEATHER_TIMEOUT_SECS",
        "WEATHER_FIXED_CITY",
        "PHOTO_URL",
        "LOG_FILE",
    ];

    fn reset_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        reset_env();
        env::set_var("BOT_TOKEN", "123456:test_token");
        env::set_var("WEATHER_API_KEY", "weather_key");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.telegram.bot_token, "123456:test_token");
        assert!(config.telegram.telegram_api_url.is_none());
        assert_eq!(config.weather_api_key, "weather_key");
        assert_eq!(config.weather_api_url, "http://api.openweathermap.org");
        assert_eq!(config.weather_lang, "en");
        assert_eq!(config.http_timeout(), Duration::from_secs(10));
        assert_eq!(config.weather_mode(), WeatherMode::PromptForCity);
        assert!(config.photo_url.is_none());
        assert_eq!(config.log_file, "logs/weather-bot.log");
        reset_env();
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        reset_env();
        env::set_var("BOT_TOKEN", "1:env_token");
        env::set_var("WEATHER_API_KEY", "custom_key");
        env::set_var("WEATHER_API_URL", "http://127.0.0.1:9000");
        env::set_var("WEATHER_LANG", "ru");
        env::set_var("WEATHER_TIMEOUT_SECS", "3");
        env::set_var("WEATHER_FIXED_CITY", " Moscow ");
        env::set_var("PHOTO_URL", "https://example.com/cat.jpg");
        env::set_var("LOG_FILE", "/tmp/weather.log");

        let config = BotConfig::load(Some("2:cli_token".to_string())).unwrap();

        assert_eq!(config.telegram.bot_token, "2:cli_token");
        assert_eq!(config.weather_api_url, "http://127.0.0.1:9000");
        assert_eq!(config.weather_lang, "ru");
        assert_eq!(config.http_timeout_secs, 3);
        assert_eq!(config.weather_mode(), WeatherMode::FixedCity("Moscow".to_string()));
        assert_eq!(config.photo_url.as_deref(), Some("https://example.com/cat.jpg"));
        assert_eq!(config.log_file, "/tmp/weather.log");

        let client_config = config.weather_client_config();
        assert_eq!(client_config.lang, "ru");
        assert_eq!(client_config.timeout, Duration::from_secs(3));
        reset_env();
    }

    #[test]
    #[serial]
    fn test_missing_weather_key_is_error() {
        reset_env();
        env::set_var("BOT_TOKEN", "1:token");
        let err = BotConfig::load(None).err().expect("expected an error");
        assert!(err.to_string().contains("WEATHER_API_KEY"));
        reset_env();
    }

    #[test]
    #[serial]
    fn test_missing_bot_token_is_error() {
        reset_env();
        env::set_var("WEATHER_API_KEY", "key");
        assert!(BotConfig::load(None).is_err());
        reset_env();
    }

    #[test]
    #[serial]
    fn test_malformed_values_are_errors() {
        reset_env();
        env::set_var("BOT_TOKEN", "1:token");
        env::set_var("WEATHER_API_KEY", "has space");
        let err = BotConfig::load(None).err().expect("expected an error");
        assert!(!err.to_string().contains("has space"));

        env::set_var("WEATHER_API_KEY", "key");
        env::set_var("WEATHER_TIMEOUT_SECS", "soon");
        assert!(BotConfig::load(None).is_err());

        env::set_var("WEATHER_TIMEOUT_SECS", "0");
        assert!(BotConfig::load(None).is_err());

        env::remove_var("WEATHER_TIMEOUT_SECS");
        env::set_var("PHOTO_URL", "not a url");
        assert!(BotConfig::load(None).is_err());
        reset_env();
    }

    #[test]
    #[serial]
    fn test_blank_optional_values_are_unset() {
        reset_env();
        env::set_var("BOT_TOKEN", "1:token");
        env::set_var("WEATHER_API_KEY", "key");
        env::set_var("WEATHER_FIXED_CITY", "   ");
        env::set_var("PHOTO_URL", "");

        let config = BotConfig::load(None).unwrap();
        assert_eq!(config.weather_mode(), WeatherMode::PromptForCity);
        assert!(config.photo_url.is_none());
        reset_env();
    }
}
