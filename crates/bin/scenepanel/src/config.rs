//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `scenepanel.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use scenepanel_adapter_http_reqwest::HttpConfig;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend API settings.
    pub api: HttpConfig,
    /// Scene list settings.
    pub panel: PanelConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Scene list configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// JSON file holding the initial `scenes`, `zones` and `buttons`.
    pub data_file: Option<PathBuf>,
    /// Render the list in edit mode.
    pub edit_mode: bool,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `scenepanel.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("scenepanel.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SCENEPANEL_API_URL") {
            self.api.base_url = val;
        }
        if let Ok(val) = std::env::var("SCENEPANEL_SYSTEM_ID") {
            self.api.system_id = val;
        }
        if let Ok(val) = std::env::var("SCENEPANEL_DATA") {
            self.panel.data_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("SCENEPANEL_EDIT") {
            self.panel.edit_mode = matches!(val.as_str(), "1" | "true" | "yes");
        }
        if let Ok(val) = std::env::var("SCENEPANEL_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.api.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "api.base_url must be an http(s) URL, got {url:?}"
            )));
        }
        if self.api.system_id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api.system_id must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "scenepanel=info,scenepanel_app=info,scenepanel_adapter_http_reqwest=info"
                .to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.system_id, "1");
        assert!(config.panel.data_file.is_none());
        assert!(!config.panel.edit_mode);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api.system_id, "1");
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [api]
            base_url = 'http://hub.local:8000'
            system_id = 'home'

            [panel]
            data_file = 'panel.json'
            edit_mode = true

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.api.base_url, "http://hub.local:8000");
        assert_eq!(config.api.system_id, "home");
        assert_eq!(config.panel.data_file, Some(PathBuf::from("panel.json")));
        assert!(config.panel.edit_mode);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
    }

    #[test]
    fn should_accept_default_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_reject_non_http_base_url() {
        let mut config = Config::default();
        config.api.base_url = "hub.local:8000".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_empty_system_id() {
        let mut config = Config::default();
        config.api.system_id = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
