//! Loader for config.toml

use std::path::{Path, PathBuf};

use podpanel_core::prelude::*;

use super::types::ClientConfig;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "podpanel";

/// `<config_dir>/podpanel/config.toml`, or a relative fallback when the
/// platform has no config directory.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILENAME)
}

/// Load the client configuration from `path`.
///
/// Returns defaults if the file doesn't exist or can't be parsed.
pub fn load_config(path: &Path) -> ClientConfig {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return ClientConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                debug!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                ClientConfig::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            ClientConfig::default()
        }
    }
}

/// Write the default config file to `path` unless one already exists.
///
/// Returns `true` if a file was written.
pub fn init_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(path, generate_default_config())
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", path, e)))?;

    info!("Wrote default config to {:?}", path);
    Ok(true)
}

fn generate_default_config() -> String {
    r#"# podpanel configuration

[api]
base_url = "http://127.0.0.1:8000"   # Backend address; endpoints live under /api
timeout_ms = 30000

[polling]
monitor_interval_ms = 4000      # Monitor status line (min 500)
dashboard_interval_ms = 7000    # Dashboard counters, runs and logs (min 500)
"#
    .to_string()
}
