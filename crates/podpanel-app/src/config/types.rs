//! Configuration types for podpanel
//!
//! Defines:
//! - `ClientConfig` - Root of `config.toml`
//! - `ApiSettings` - Where the backend lives
//! - `PollingSettings` - Refresh cadence of the two status cycles

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Minimum interval for either polling cycle (500ms)
pub const POLL_MIN_MS: u64 = 500;

/// Root of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub polling: PollingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Backend base URL; endpoints are mounted under `/api`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PollingSettings {
    /// Monitor status cycle
    #[serde(default = "default_monitor_interval_ms")]
    pub monitor_interval_ms: u64,

    /// Dashboard/runs/logs cycle
    #[serde(default = "default_dashboard_interval_ms")]
    pub dashboard_interval_ms: u64,
}

impl Default for PollingSettings {
    fn default() -> Self {
        Self {
            monitor_interval_ms: default_monitor_interval_ms(),
            dashboard_interval_ms: default_dashboard_interval_ms(),
        }
    }
}

impl PollingSettings {
    /// Monitor interval, clamped to [`POLL_MIN_MS`]
    pub fn monitor_interval(&self) -> Duration {
        Duration::from_millis(self.monitor_interval_ms.max(POLL_MIN_MS))
    }

    /// Dashboard interval, clamped to [`POLL_MIN_MS`]
    pub fn dashboard_interval(&self) -> Duration {
        Duration::from_millis(self.dashboard_interval_ms.max(POLL_MIN_MS))
    }
}

fn default_monitor_interval_ms() -> u64 {
    4000
}

fn default_dashboard_interval_ms() -> u64 {
    7000
}
