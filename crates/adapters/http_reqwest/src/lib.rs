//! # scenepanel-adapter-http-reqwest
//!
//! HTTP adapter backing the [`ZoneSource`] port.
//!
//! ## Endpoint
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | `GET` | `/api/v1/systems/{system_id}/zones` | JSON array of zones |
//!
//! Non-2xx answers become [`HttpError::Status`], carrying the `error` field of
//! a JSON error body when the backend sends one.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `scenepanel-app` and `scenepanel-domain`.

mod config;
mod error;

pub use config::HttpConfig;
pub use error::HttpError;

use reqwest::header::{ACCEPT, CACHE_CONTROL};
use reqwest::{Client, Response};
use serde::Deserialize;

use scenepanel_app::ports::ZoneSource;
use scenepanel_domain::error::PanelError;
use scenepanel_domain::zone::Zone;

/// JSON error body returned by the backend on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, HttpError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {}", status.as_u16()),
    };
    Err(HttpError::Status {
        status: status.as_u16(),
        message,
    })
}

/// Zone source fetching from the backend REST API.
#[derive(Debug, Clone)]
pub struct HttpZoneSource {
    client: Client,
    config: HttpConfig,
}

impl HttpZoneSource {
    /// Create a source with a fresh HTTP client.
    #[must_use]
    pub fn new(config: HttpConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Create a source reusing an existing HTTP client.
    #[must_use]
    pub fn with_client(client: Client, config: HttpConfig) -> Self {
        Self { client, config }
    }

    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Fetch the zones of the configured system.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] when the request fails or the body is
    /// not a zone list, and [`HttpError::Status`] on a non-2xx answer.
    pub async fn fetch(&self) -> Result<Vec<Zone>, HttpError> {
        let url = self.config.zones_url();
        tracing::debug!(%url, "fetching zones");

        let resp = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;
        let zones: Vec<Zone> = check_response(resp).await?.json().await?;

        tracing::debug!(count = zones.len(), system_id = %self.config.system_id, "zones fetched");
        Ok(zones)
    }
}

impl ZoneSource for HttpZoneSource {
    async fn fetch_zones(&self) -> Result<Vec<Zone>, PanelError> {
        self.fetch().await.map_err(HttpError::into_domain)
    }
}
