//! Backend API configuration.

use serde::Deserialize;

/// Where the zone refresh reaches the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Scheme, host and port of the backend (e.g. `http://hub.local:8000`).
    pub base_url: String,
    /// Identifier of the system whose zones are listed.
    pub system_id: String,
}

impl HttpConfig {
    /// URL of the zone listing for the configured system.
    #[must_use]
    pub fn zones_url(&self) -> String {
        format!(
            "{}/api/v1/systems/{}/zones",
            self.base_url.trim_end_matches('/'),
            self.system_id
        )
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            system_id: "1".to_string(),
        }
    }
}
