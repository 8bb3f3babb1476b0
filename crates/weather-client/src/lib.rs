//! # Weather client
//!
//! Defines the [`WeatherProvider`] trait and an OpenWeatherMap implementation ([`OpenWeatherClient`]),
//! plus the [`ImageSource`] trait used by the photo command ([`HttpImageSource`]).
//!
//! Every call performs exactly one outbound HTTP request. There is no caching and no retry.

mod error;
mod image;
mod openweather;

pub use error::{ImageError, WeatherError};
pub use image::{HttpImageSource, ImageSource};
pub use openweather::{OpenWeatherClient, OpenWeatherConfig, DEFAULT_BASE_URL};

use async_trait::async_trait;

/// Current conditions for one city, in metric units.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: Option<u8>,
    /// Metres per second.
    pub wind_speed: Option<f64>,
    /// Millimetres over the last hour; zero or absent means no precipitation.
    pub precipitation_1h: Option<f64>,
    /// Short description, e.g. "clear sky".
    pub condition: String,
}

/// Weather provider interface: one lookup by city name.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn fetch(&self, city: &str) -> Result<WeatherReading, WeatherError>;
}

/// Masks a credential for logging: keeps a short prefix and suffix of long keys.
pub(crate) fn mask_secret(secret: &str) -> String {
    if secret.len() <= 11 || !secret.is_ascii() {
        "***".to_string()
    } else {
        format!("{}***{}", &secret[..4], &secret[secret.len() - 4..])
    }
}
