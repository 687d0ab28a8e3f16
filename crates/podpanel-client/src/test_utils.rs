//! Test utilities for backend consumers
//!
//! [`FakeBackend`] is an in-memory [`Backend`] that records every call and
//! serves scripted responses. Individual endpoints can be made to fail with a
//! given detail.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use podpanel_core::prelude::*;
use podpanel_core::{
    AnalysisResult, CatalogVariant, DashboardStats, HealthStatus, MockupDescriptor,
    MonitorStatus, Settings,
};

use crate::api::{Backend, DraftCreated, DraftRequest, QueuedItem};

/// Scripted backend state
#[derive(Debug, Default)]
pub struct FakeState {
    /// Currently persisted settings
    pub settings: Settings,
    /// What `reset_settings` restores
    pub defaults: Settings,
    pub monitoring: bool,
    pub queue: Vec<String>,
    pub dashboard: DashboardStats,
    pub runs: Vec<Value>,
    pub logs: Vec<Value>,
    pub analysis: AnalysisResult,
    pub draft_id: String,
    pub variants: Vec<CatalogVariant>,
    pub mockups: Vec<MockupDescriptor>,
    /// Endpoint name -> failure detail
    pub failures: HashMap<&'static str, String>,
    /// Endpoint names in call order
    pub calls: Vec<&'static str>,
    /// Every settings record received by `save_settings`
    pub saved: Vec<Settings>,
    /// Every draft request received
    pub drafts: Vec<DraftRequest>,
}

/// In-memory [`Backend`] for tests
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<FakeState>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutate the scripted state
    pub fn with_state(&self, f: impl FnOnce(&mut FakeState)) {
        f(&mut *self.state.lock().unwrap());
    }

    /// Read from the scripted state
    pub fn inspect<R>(&self, f: impl FnOnce(&FakeState) -> R) -> R {
        f(&*self.state.lock().unwrap())
    }

    /// Make `endpoint` fail with `detail` until cleared
    pub fn fail(&self, endpoint: &'static str, detail: &str) {
        self.with_state(|s| {
            s.failures.insert(endpoint, detail.to_string());
        });
    }

    pub fn clear_failure(&self, endpoint: &'static str) {
        self.with_state(|s| {
            s.failures.remove(endpoint);
        });
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.inspect(|s| s.calls.clone())
    }

    pub fn call_count(&self, endpoint: &str) -> usize {
        self.inspect(|s| s.calls.iter().filter(|c| **c == endpoint).count())
    }

    fn enter<R>(&self, endpoint: &'static str, f: impl FnOnce(&mut FakeState) -> R) -> Result<R> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(endpoint);
        if let Some(detail) = state.failures.get(endpoint) {
            return Err(Error::request_failure(detail.clone()));
        }
        Ok(f(&mut *state))
    }
}

/// Build a catalog variant list with ids `1..=count`
pub fn catalog_variants(count: i64) -> Vec<CatalogVariant> {
    (1..=count)
        .map(|id| CatalogVariant {
            id,
            title: Some(format!("Variant {id}")),
            options: Default::default(),
            price: Some(1000 + id),
            cost: Some(500 + id),
        })
        .collect()
}

impl Backend for FakeBackend {
    async fn get_settings(&self) -> Result<Settings> {
        self.enter("get_settings", |s| s.settings.clone())
    }

    async fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.enter("save_settings", |s| {
            s.settings = settings.clone();
            s.saved.push(settings.clone());
        })
    }

    async fn reset_settings(&self) -> Result<()> {
        self.enter("reset_settings", |s| s.settings = s.defaults.clone())
    }

    async fn monitor_status(&self) -> Result<MonitorStatus> {
        self.enter("monitor_status", |s| MonitorStatus {
            monitoring: s.monitoring,
            watch_folder: s.settings.watch_folder.clone(),
            queue_size: s.queue.len() as u64,
            current_file: None,
        })
    }

    async fn start_monitor(&self) -> Result<()> {
        self.enter("start_monitor", |s| s.monitoring = true)
    }

    async fn stop_monitor(&self) -> Result<()> {
        self.enter("stop_monitor", |s| s.monitoring = false)
    }

    async fn dashboard(&self) -> Result<DashboardStats> {
        self.enter("dashboard", |s| s.dashboard)
    }

    async fn runs(&self) -> Result<Vec<Value>> {
        self.enter("runs", |s| s.runs.clone())
    }

    async fn logs(&self) -> Result<Vec<Value>> {
        self.enter("logs", |s| s.logs.clone())
    }

    async fn analyze(&self, _image_path: &str) -> Result<AnalysisResult> {
        self.enter("analyze", |s| s.analysis.clone())
    }

    async fn create_draft(&self, request: &DraftRequest) -> Result<DraftCreated> {
        self.enter("create_draft", |s| {
            s.drafts.push(request.clone());
            DraftCreated {
                printify_product_id: Some(s.draft_id.clone()),
                printify_upload_id: None,
            }
        })
    }

    async fn queue(&self, image_path: &str) -> Result<QueuedItem> {
        self.enter("queue", |s| {
            s.queue.push(image_path.to_string());
            QueuedItem {
                ok: true,
                queued_path: image_path.to_string(),
            }
        })
    }

    async fn variants(
        &self,
        _blueprint_id: i64,
        _print_provider_id: i64,
    ) -> Result<Vec<CatalogVariant>> {
        self.enter("variants", |s| s.variants.clone())
    }

    async fn mockups(
        &self,
        _blueprint_id: i64,
        _print_provider_id: i64,
    ) -> Result<Vec<MockupDescriptor>> {
        self.enter("mockups", |s| s.mockups.clone())
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.enter("health", |_| HealthStatus {
            ok: true,
            service: "printify-auto".to_string(),
        })
    }
}
