//! podpanel - terminal control panel for the print-on-demand automation backend
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use podpanel_app::config::{default_config_path, init_config_file, load_config};
use podpanel_core::prelude::*;

/// podpanel - drive the print-on-demand automation backend from a terminal
#[derive(Parser, Debug)]
#[command(name = "podpanel")]
#[command(about = "Terminal control panel for the print-on-demand automation backend", long_about = None)]
struct Args {
    /// Backend base URL, overriding `api.base_url` from the config file
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Config file to read instead of the per-user default
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default config file (if none exists) and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    let config_path = args.config.unwrap_or_else(default_config_path);

    if args.init_config {
        if init_config_file(&config_path)? {
            eprintln!("Wrote default config to {}", config_path.display());
        } else {
            eprintln!("Config already exists at {}", config_path.display());
        }
        return Ok(());
    }

    // Logs go to a file, since the TUI owns stdout
    podpanel_core::logging::init()?;

    let mut config = load_config(&config_path);
    if let Some(api_url) = args.api_url {
        info!("Using API URL from the command line: {}", api_url);
        config.api.base_url = api_url;
    }

    let result = podpanel_tui::run(config).await;
    match &result {
        Err(e) if e.is_fatal() => error!("Terminal failure: {:?}", e),
        Err(e) => error!("Application error: {:?}", e),
        Ok(()) => {}
    }
    result
}
