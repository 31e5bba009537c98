//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use skyadmin_core::prelude::*;
use skyadmin_core::ContentMode;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "skygarden-admin";

/// Environment variable overriding `[api] base_url`
pub const BASE_URL_ENV: &str = "SKYADMIN_BASE_URL";

/// Values given on the command line; they win over file and environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub start_mode: Option<ContentMode>,
}

/// `<config_dir>/skygarden-admin/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from a config file
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Apply `SKYADMIN_BASE_URL` when set and non-empty
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
        let base_url = base_url.trim();
        if !base_url.is_empty() {
            debug!("{} overrides base URL", BASE_URL_ENV);
            settings.api.base_url = base_url.to_string();
        }
    }
}

/// File, then environment, then command line
pub fn resolve_settings(config_path: &Path, cli: &CliOverrides) -> Settings {
    let mut settings = load_settings(config_path);
    apply_env_overrides(&mut settings);
    if let Some(base_url) = &cli.base_url {
        settings.api.base_url = base_url.clone();
    }
    if let Some(mode) = cli.start_mode {
        settings.behavior.start_mode = mode;
    }
    settings
}

/// Write a commented default config file
///
/// Returns `false` without touching anything when the file already exists.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }
    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", dir.display(), e)))?;
    }
    std::fs::write(config_path, generate_default_config())
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    info!("Created default config at {:?}", config_path);
    Ok(true)
}

fn generate_default_config() -> String {
    r#"# Skygarden Admin Configuration

[api]
base_url = "http://localhost:8080/webadmin"   # CMS API root (SKYADMIN_BASE_URL overrides)
# timeout_secs = 30                           # Unset = no request timeout

[behavior]
confirm_quit = true     # Ask before quitting
start_mode = ""         # First list after login: "", template, element, stylesheet, script, image, file, movie

[preview]
browser = ""            # Empty = system default
"#
    .to_string()
}
