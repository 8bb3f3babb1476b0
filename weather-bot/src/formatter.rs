//! Renders a [`WeatherReading`] as the reply text.

use weather_client::WeatherReading;

const NONE_SENTINEL: &str = "none";
const NOT_AVAILABLE: &str = "n/a";

/// Fixed template; temperature, wind, and precipitation to one decimal place.
pub fn render(city: &str, reading: &WeatherReading) -> String {
    let wind = reading
        .wind_speed
        .map(|speed| format!("{:.1} m/s", speed))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let humidity = reading
        .humidity
        .map(|h| format!("{}%", h))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    format!(
        "Weather in {}:\n\
         🌡 Temperature: {:.1}°C\n\
         💨 Wind: {}\n\
         💧 Humidity: {}\n\
         🌧 Precipitation: {}\n\
         ☁️ Conditions: {}",
        city,
        reading.temperature,
        wind,
        humidity,
        precipitation(reading.precipitation_1h),
        reading.condition
    )
}

fn precipitation(one_hour: Option<f64>) -> String {
    match one_hour {
        Some(mm) if mm > 0.0 => format!("{:.1} mm/h", mm),
        _ => NONE_SENTINEL.to_string(),
    }
}
