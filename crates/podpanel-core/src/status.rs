//! Live status records polled from the backend
//!
//! Runs and logs are owned by the server; the client only displays them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::serde_helpers::null_as_default;

/// `GET /monitor/status`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorStatus {
    pub monitoring: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub watch_folder: String,
    pub queue_size: u64,
    pub current_file: Option<String>,
}

impl MonitorStatus {
    /// Single-line rendering used by the status bar
    pub fn status_line(&self) -> String {
        format!(
            "Monitoring: {} | Folder: {} | Queue: {} | Current: {}",
            if self.monitoring { "ON" } else { "OFF" },
            or_dash(&self.watch_folder),
            self.queue_size,
            or_dash(self.current_file.as_deref().unwrap_or_default()),
        )
    }
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

/// `GET /dashboard`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub total_products: u64,
    pub draft_products: u64,
    pub total_logs: u64,
    pub error_logs: u64,
}

/// One product run from `GET /runs`, decoded for the preview
///
/// Only the fields needed for the preview are typed; the rest lands in
/// `extra`. The raw dump is rendered from the original JSON, not from this.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunRecord {
    pub id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub image_path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub printify_product_id: Option<String>,
    pub error_message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RunRecord {
    /// Lenient decode of one raw run; anything unreadable previews as empty.
    pub fn from_raw(raw: &Value) -> Self {
        serde_json::from_value(raw.clone()).unwrap_or_else(|e| {
            tracing::debug!("Unreadable run record {}: {}", raw, e);
            Self::default()
        })
    }

    /// `STATUS | image_path [| draft: id]`; the error message is rendered
    /// separately so it can carry its own style.
    pub fn preview_line(&self) -> String {
        let mut line = format!("{} | {}", self.status.to_uppercase(), self.image_path);
        if let Some(id) = self.printify_product_id.as_deref().filter(|s| !s.is_empty()) {
            line.push_str(&format!(" | draft: {id}"));
        }
        line
    }

    pub fn error(&self) -> Option<&str> {
        self.error_message.as_deref().filter(|s| !s.is_empty())
    }
}

/// `GET /health`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub ok: bool,
    pub service: String,
}
