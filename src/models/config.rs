//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client behavior settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Edition lookup settings
    #[serde(default)]
    pub locator: LocatorConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.http.max_concurrent == 0 {
            return Err(AppError::validation("http.max_concurrent must be > 0"));
        }
        if self.locator.base_url.trim().is_empty() {
            return Err(AppError::validation("locator.base_url is empty"));
        }
        if Url::parse(&self.locator.base_url).is_err() {
            return Err(AppError::validation(format!(
                "locator.base_url is not a valid URL: {}",
                self.locator.base_url
            )));
        }
        if self.locator.base_names.is_empty() {
            return Err(AppError::validation("No base names defined"));
        }
        if self
            .locator
            .base_names
            .iter()
            .any(|name| name.trim().is_empty())
        {
            return Err(AppError::validation("locator.base_names contains an empty name"));
        }
        if self.locator.extension.trim().is_empty() {
            return Err(AppError::validation("locator.extension is empty"));
        }
        Ok(())
    }
}

/// HTTP client behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Maximum concurrent date resolutions when probing a range
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_concurrent: defaults::max_concurrent(),
        }
    }
}

/// Edition lookup settings.
///
/// The first entry of `base_names` doubles as the canonical fallback base:
/// when no candidate exists for a date, the reported filename is
/// `<first base>-<date key>.<extension>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocatorConfig {
    /// Asset origin base URL that edition files are served under
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Base names that uploaded editions have been observed to use
    #[serde(default = "defaults::base_names")]
    pub base_names: Vec<String>,

    /// File extension of edition documents (without the dot)
    #[serde(default = "defaults::extension")]
    pub extension: String,

    /// Directory (relative to the site root) that uploads are published to
    #[serde(default = "defaults::publish_dir")]
    pub publish_dir: String,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            base_names: defaults::base_names(),
            extension: defaults::extension(),
            publish_dir: defaults::publish_dir(),
        }
    }
}

mod defaults {
    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; epaper-locator/1.0)".into()
    }
    pub fn timeout() -> u64 {
        10
    }
    pub fn max_concurrent() -> usize {
        5
    }

    // Locator defaults
    pub fn base_url() -> String {
        "http://localhost:5173/".into()
    }
    pub fn base_names() -> Vec<String> {
        // Order matters: earlier names win when several files exist for a day.
        vec![
            "epaper".into(),
            "newspaper".into(),
            "flashindia".into(),
            "news".into(),
            "paper".into(),
        ]
    }
    pub fn extension() -> String {
        "pdf".into()
    }
    pub fn publish_dir() -> String {
        "public".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.http.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.http.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let mut config = Config::default();
        config.locator.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_base_names() {
        let mut config = Config::default();
        config.locator.base_names.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_base_names_start_with_canonical() {
        let config = Config::default();
        assert_eq!(config.locator.base_names[0], "epaper");
        assert_eq!(config.locator.base_names.len(), 5);
    }

    #[test]
    fn load_from_toml_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[http]
timeout_secs = 3

[locator]
base_url = "https://assets.example.com/editions/"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.http.timeout_secs, 3);
        assert_eq!(config.locator.base_url, "https://assets.example.com/editions/");
        // Untouched sections keep their defaults
        assert_eq!(config.locator.extension, "pdf");
        assert!(config.validate().is_ok());
    }
}
