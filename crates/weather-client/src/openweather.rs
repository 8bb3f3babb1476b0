//! OpenWeatherMap current-weather client.
//!
//! Sends `GET <base_url>/data/2.5/weather?q=<city>&appid=<key>&units=metric&lang=<lang>` and maps the
//! JSON payload into a [`WeatherReading`]. HTTP 404 is the provider's "city not found".

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::{mask_secret, WeatherError, WeatherProvider, WeatherReading};

pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org";
const WEATHER_PATH: &str = "/data/2.5/weather";

/// Connection settings for [`OpenWeatherClient`].
#[derive(Clone)]
pub struct OpenWeatherConfig {
    pub api_key: String,
    /// Scheme and host, without trailing path (e.g. `http://api.openweathermap.org`).
    pub base_url: String,
    /// Language code for condition descriptions.
    pub lang: String,
    pub timeout: Duration,
}

impl OpenWeatherConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            lang: "en".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_lang(mut self, lang: String) -> Self {
        self.lang = lang;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for OpenWeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherConfig")
            .field("api_key", &mask_secret(&self.api_key))
            .field("base_url", &self.base_url)
            .field("lang", &self.lang)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    main: MainBlock,
    #[serde(default)]
    weather: Vec<Condition>,
    #[serde(default)]
    wind: Option<WindBlock>,
    #[serde(default)]
    rain: Option<RainBlock>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    #[serde(default)]
    humidity: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    #[serde(default)]
    speed: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RainBlock {
    #[serde(rename = "1h", default)]
    one_hour: Option<f64>,
}

impl TryFrom<CurrentWeather> for WeatherReading {
    type Error = WeatherError;

    fn try_from(payload: CurrentWeather) -> Result<Self, Self::Error> {
        let condition = payload
            .weather
            .into_iter()
            .next()
            .map(|c| c.description)
            .ok_or(WeatherError::MissingCondition)?;

        Ok(WeatherReading {
            temperature: payload.main.temp,
            humidity: payload.main.humidity,
            wind_speed: payload.wind.and_then(|w| w.speed),
            precipitation_1h: payload.rain.and_then(|r| r.one_hour),
            condition,
        })
    }
}

/// OpenWeatherMap implementation of [`WeatherProvider`].
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    config: OpenWeatherConfig,
}

impl OpenWeatherClient {
    /// Builds the HTTP client with the configured request timeout.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(WeatherError::request)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &OpenWeatherConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), WEATHER_PATH)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn fetch(&self, city: &str) -> Result<WeatherReading, WeatherError> {
        info!(
            city = %city,
            lang = %self.config.lang,
            api_key = %mask_secret(&self.config.api_key),
            "step: weather provider request"
        );

        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", "metric"),
                ("lang", self.config.lang.as_str()),
            ])
            .send()
            .await
            .map_err(WeatherError::request)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            info!(city = %city, "Weather provider: city not found");
            return Err(WeatherError::NotFound);
        }
        if !status.is_success() {
            warn!(city = %city, status = status.as_u16(), "Weather provider returned error status");
            return Err(WeatherError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(WeatherError::request)?;
        let payload: CurrentWeather = serde_json::from_slice(&body).map_err(WeatherError::Parse)?;
        let reading = WeatherReading::try_from(payload)?;

        info!(
            city = %city,
            temperature = reading.temperature,
            condition = %reading.condition,
            "Weather provider request completed"
        );
        Ok(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_with_all_fields() {
        let json = r#"{
            "main": {"temp": 15.2, "humidity": 70},
            "weather": [{"description": "clear sky"}, {"description": "mist"}],
            "wind": {"speed": 3.4},
            "rain": {"1h": 2.3}
        }"#;
        let payload: CurrentWeather = serde_json::from_str(json).unwrap();
        let reading = WeatherReading::try_from(payload).unwrap();

        assert_eq!(reading.temperature, 15.2);
        assert_eq!(reading.humidity, Some(70));
        assert_eq!(reading.wind_speed, Some(3.4));
        assert_eq!(reading.precipitation_1h, Some(2.3));
        assert_eq!(reading.condition, "clear sky");
    }

    #[test]
    fn test_payload_without_optional_blocks() {
        let json = r#"{"main": {"temp": -3.0}, "weather": [{"description": "snow"}]}"#;
        let payload: CurrentWeather = serde_json::from_str(json).unwrap();
        let reading = WeatherReading::try_from(payload).unwrap();

        assert_eq!(reading.humidity, None);
        assert_eq!(reading.wind_speed, None);
        assert_eq!(reading.precipitation_1h, None);
    }

    #[test]
    fn test_payload_with_empty_condition_list() {
        let json = r#"{"main": {"temp": 1.0}, "weather": []}"#;
        let payload: CurrentWeather = serde_json::from_str(json).unwrap();
        assert!(matches!(
            WeatherReading::try_from(payload),
            Err(WeatherError::MissingCondition)
        ));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let config = OpenWeatherConfig::new("key".to_string())
            .with_base_url("http://localhost:1234/".to_string());
        let client = OpenWeatherClient::new(config).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:1234/data/2.5/weather");
    }

    #[test]
    fn test_config_debug_masks_api_key() {
        let config = OpenWeatherConfig::new("super-secret-api-key".to_string());
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-api-key"));
        assert!(debug.contains("supe***-key"));
    }
}
