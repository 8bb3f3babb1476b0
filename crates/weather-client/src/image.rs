//! Fixed-URL image fetcher used by the photo command.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument, warn};
use weather_core::Photo;

use crate::ImageError;

const DEFAULT_FILE_NAME: &str = "photo.jpg";

/// Source of the single image attached by the photo command.
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn fetch(&self) -> Result<Photo, ImageError>;
}

/// Downloads one fixed URL per call. The whole body is read into memory; the response is released on every path.
#[derive(Debug, Clone)]
pub struct HttpImageSource {
    client: Client,
    url: String,
    file_name: String,
}

impl HttpImageSource {
    pub fn new(url: String, timeout: Duration) -> Result<Self, ImageError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ImageError::Request)?;
        let file_name = file_name_from_url(&url);
        Ok(Self {
            client,
            url,
            file_name,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// Last non-empty path segment of the URL, ignoring query and fragment; `photo.jpg` when there is none.
fn file_name_from_url(url: &str) -> String {
    let without_query = url.split(|c: char| c == '?' || c == '#').next().unwrap_or(url);
    let path = without_query
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(without_query);
    path.split('/')
        .skip(1)
        .filter(|segment| !segment.is_empty())
        .last()
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string())
}

#[async_trait]
impl ImageSource for HttpImageSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Photo, ImageError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(ImageError::Request)?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Image host returned error status");
            return Err(ImageError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(ImageError::Request)?;
        if bytes.is_empty() {
            return Err(ImageError::Empty);
        }

        info!(size = bytes.len(), file_name = %self.file_name, "Image fetched");
        Ok(Photo {
            bytes: bytes.to_vec(),
            file_name: self.file_name.clone(),
        })
    }
}
