use thiserror::Error;

const MSG_NOT_FOUND: &str = "City not found. Check the spelling.";
const MSG_RETRIEVE_FAILED: &str = "Could not retrieve weather data.";
const MSG_PROCESS_FAILED: &str = "Could not process weather data.";
const MSG_IMAGE_FAILED: &str = "Could not load the picture.";

/// Weather lookup failure. Display strings never include the API key or the response body.
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("city not found")]
    NotFound,

    /// Network failure, timeout, or client construction failure. The URL (which carries the key) is stripped.
    #[error("weather request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("weather provider returned status {0}")]
    Status(u16),

    #[error("malformed weather payload: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("weather payload has no condition")]
    MissingCondition,
}

impl WeatherError {
    pub(crate) fn request(err: reqwest::Error) -> Self {
        WeatherError::Request(err.without_url())
    }

    /// Text shown to the chat user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::NotFound => MSG_NOT_FOUND,
            WeatherError::Request(_) | WeatherError::Status(_) => MSG_RETRIEVE_FAILED,
            WeatherError::Parse(_) | WeatherError::MissingCondition => MSG_PROCESS_FAILED,
        }
    }
}

/// Image fetch failure for the photo command.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("image request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("image host returned status {0}")]
    Status(u16),

    #[error("image body is empty")]
    Empty,
}

impl ImageError {
    pub fn user_message(&self) -> &'static str {
        MSG_IMAGE_FAILED
    }
}
