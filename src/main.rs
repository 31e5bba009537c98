//! Skygarden Admin - terminal administration client for the Skygarden CMS
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use skyadmin_app::config::{self, CliOverrides};
use skyadmin_core::prelude::*;
use skyadmin_core::{logging, ContentMode};

/// Skygarden Admin - manage Skygarden CMS content from the terminal
#[derive(Parser, Debug)]
#[command(name = "skyadmin", version)]
#[command(about = "Terminal administration client for the Skygarden CMS", long_about = None)]
struct Args {
    /// CMS API root, e.g. http://localhost:8080/webadmin
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Config file (defaults to <config_dir>/skygarden-admin/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// List shown after login: content, template, element, stylesheet, script, image, file, movie
    #[arg(long, value_name = "MODE", value_parser = parse_mode)]
    mode: Option<ContentMode>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

/// Accept the query value (`template`) or the label (`CSS`)
///
/// `content` names the default mode, whose query value is empty.
fn parse_mode(value: &str) -> std::result::Result<ContentMode, String> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("content") {
        return Ok(ContentMode::Content);
    }
    ContentMode::from_query(&value.to_ascii_lowercase())
        .or_else(|| {
            ContentMode::ALL
                .into_iter()
                .find(|mode| mode.label().eq_ignore_ascii_case(value))
        })
        .ok_or_else(|| format!("unknown mode '{}'", value))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    logging::init()?;

    let config_path = args.config.unwrap_or_else(config::default_config_path);

    if args.init_config {
        if config::init_config_file(&config_path)? {
            eprintln!("Created {}", config_path.display());
        } else {
            eprintln!("{} already exists; left unchanged", config_path.display());
        }
        return Ok(());
    }

    let cli = CliOverrides {
        base_url: args.base_url,
        start_mode: args.mode,
    };
    let settings = config::resolve_settings(&config_path, &cli);
    info!(
        "Loaded settings from {:?} (start mode {:?})",
        config_path, settings.behavior.start_mode
    );

    skyadmin_tui::run(settings).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode_accepts_query_and_label() {
        assert_eq!(parse_mode("template"), Ok(ContentMode::Template));
        assert_eq!(parse_mode("CSS"), Ok(ContentMode::Stylesheet));
        assert_eq!(parse_mode("content"), Ok(ContentMode::Content));
        assert_eq!(parse_mode(" Image "), Ok(ContentMode::Image));
        assert!(parse_mode("blog").is_err());
    }

    #[test]
    fn test_args_parse_overrides() {
        let args = Args::parse_from([
            "skyadmin",
            "--base-url",
            "http://cms/webadmin",
            "--mode",
            "element",
        ]);
        assert_eq!(args.base_url.as_deref(), Some("http://cms/webadmin"));
        assert_eq!(args.mode, Some(ContentMode::Element));
        assert!(!args.init_config);
    }
}
