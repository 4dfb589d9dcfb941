//! Typed HTTP client for the portal REST API.
//!
//! One thin wrapper per endpoint family: series data (JSON), map frames and
//! legends (binary blobs). There is no retry or backoff; callers log the
//! error, surface it, and render with whatever they have.

pub mod endpoints;

use met_core::filter::Filter;
use met_core::series::Series;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("portal returned HTTP {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("payload decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client bound to one portal base URL.
///
/// Works on native targets (CLI) and wasm32 (fetch-backed) alike.
#[derive(Debug, Clone)]
pub struct PortalClient {
    base_url: String,
    http: reqwest::Client,
}

impl PortalClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Client against the production API root.
    pub fn default_portal() -> Self {
        Self::new(endpoints::DEFAULT_BASE_URL)
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, ClientError> {
        log::debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status().as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// Fetch the series payload for a filter.
    pub async fn fetch_series(&self, filter: &Filter) -> Result<Vec<Series>, ClientError> {
        let url = endpoints::series_url(&self.base_url, filter);
        log::debug!("GET {}", url);
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status().as_u16()));
        }
        let body = response.text().await?;
        Ok(Series::from_json(&body)?)
    }

    /// Fetch one raster map frame (binary image blob).
    pub async fn fetch_map_image(
        &self,
        filter: &Filter,
        offset: u32,
    ) -> Result<Vec<u8>, ClientError> {
        let url = endpoints::map_image_url(&self.base_url, filter, offset);
        self.get_bytes(&url).await
    }

    /// Fetch the legend for a filter's field (binary image blob).
    pub async fn fetch_legend(&self, filter: &Filter) -> Result<Vec<u8>, ClientError> {
        let url = endpoints::legend_url(&self.base_url, filter);
        self.get_bytes(&url).await
    }
}
