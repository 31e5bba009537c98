//! Configuration for Skygarden Admin
//!
//! Supports:
//! - `<config_dir>/skygarden-admin/config.toml` - Global settings
//! - `SKYADMIN_BASE_URL` - Environment override for the API base URL
//! - Command line overrides applied by the binary

pub mod settings;
pub mod types;

pub use settings::{
    apply_env_overrides, default_config_path, init_config_file, load_settings, resolve_settings,
    CliOverrides, BASE_URL_ENV,
};
pub use types::*;
