//! Configuration type definitions

use std::time::Duration;

use serde::{Deserialize, Serialize};
use skyadmin_api::ClientConfig;
use skyadmin_core::ContentMode;

/// Default API root of a local Skygarden back end
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/webadmin";

/// Global settings from config.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub preview: PreviewSettings,
}

impl Settings {
    /// Connection settings for the HTTP client
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api.base_url.clone(),
            timeout: self.api.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// CMS connection settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// API root including the `/webadmin` prefix
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds; absent = wait indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before quitting
    #[serde(default = "default_true")]
    pub confirm_quit: bool,

    /// List shown after login (`""` = content, `template`, `element`, ...)
    #[serde(default)]
    pub start_mode: ContentMode,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            confirm_quit: true,
            start_mode: ContentMode::Content,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Preview settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PreviewSettings {
    /// Browser command; empty = platform default opener
    #[serde(default)]
    pub browser: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
        assert!(settings.behavior.confirm_quit);
        assert_eq!(settings.behavior.start_mode, ContentMode::Content);
        assert!(settings.preview.browser.is_empty());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[behavior]
start_mode = "element"
"#,
        )
        .unwrap();
        assert_eq!(settings.behavior.start_mode, ContentMode::Element);
        assert!(settings.behavior.confirm_quit);
        assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_config_timeout() {
        let mut settings = Settings::default();
        assert_eq!(settings.client_config().timeout, None);
        settings.api.timeout_secs = Some(15);
        assert_eq!(
            settings.client_config().timeout,
            Some(Duration::from_secs(15))
        );
    }
}
