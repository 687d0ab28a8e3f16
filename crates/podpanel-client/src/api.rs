//! Typed backend API
//!
//! [`Backend`] is the seam the application talks through: one method per
//! endpoint. [`HttpBackend`] implements it over [`Transport`]; tests use the
//! fake from `test_utils`.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use podpanel_core::prelude::*;
use podpanel_core::serde_helpers::null_as_default;
use podpanel_core::{
    AnalysisResult, CatalogVariant, DashboardStats, HealthStatus, MockupDescriptor,
    MonitorStatus, Settings,
};

use crate::transport::Transport;

/// Body of `POST /analyze` and `POST /queue`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePathRequest {
    pub image_path: String,
}

/// Body of `POST /draft`
///
/// `analysis`/`listing` serialize as `null` when no analysis preceded the
/// call; the backend decides what to do with that. A cached pair is sent
/// back as the raw JSON the analyze call returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftRequest {
    pub image_path: String,
    pub analysis: Option<Value>,
    pub listing: Option<Value>,
}

impl DraftRequest {
    pub fn new(image_path: impl Into<String>, cached: Option<&AnalysisResult>) -> Self {
        Self {
            image_path: image_path.into(),
            analysis: cached.map(|c| c.analysis.clone()),
            listing: cached.map(|c| c.listing.clone()),
        }
    }
}

/// Response of `POST /draft`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftCreated {
    pub printify_product_id: Option<String>,
    pub printify_upload_id: Option<String>,
}

/// Response of `POST /queue`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueuedItem {
    pub ok: bool,
    pub queued_path: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VariantsResponse {
    #[serde(deserialize_with = "null_as_default")]
    variants: Vec<CatalogVariant>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MockupsResponse {
    #[serde(deserialize_with = "null_as_default")]
    mockups: Vec<MockupDescriptor>,
}

/// Operations offered by the automation backend
#[trait_variant::make(Backend: Send)]
pub trait LocalBackend {
    /// `GET /settings`
    async fn get_settings(&self) -> Result<Settings>;

    /// `POST /settings`
    async fn save_settings(&self, settings: &Settings) -> Result<()>;

    /// `POST /settings/reset`
    async fn reset_settings(&self) -> Result<()>;

    /// `GET /monitor/status`
    async fn monitor_status(&self) -> Result<MonitorStatus>;

    /// `POST /monitor/start`
    async fn start_monitor(&self) -> Result<()>;

    /// `POST /monitor/stop`
    async fn stop_monitor(&self) -> Result<()>;

    /// `GET /dashboard`
    async fn dashboard(&self) -> Result<DashboardStats>;

    /// `GET /runs`
    async fn runs(&self) -> Result<Vec<Value>>;

    /// `GET /logs`, kept raw
    async fn logs(&self) -> Result<Vec<Value>>;

    /// `POST /analyze`
    async fn analyze(&self, image_path: &str) -> Result<AnalysisResult>;

    /// `POST /draft`
    async fn create_draft(&self, request: &DraftRequest) -> Result<DraftCreated>;

    /// `POST /queue`
    async fn queue(&self, image_path: &str) -> Result<QueuedItem>;

    /// `GET /printify/variants`
    async fn variants(&self, blueprint_id: i64, print_provider_id: i64)
        -> Result<Vec<CatalogVariant>>;

    /// `GET /printify/mockups`
    async fn mockups(
        &self,
        blueprint_id: i64,
        print_provider_id: i64,
    ) -> Result<Vec<MockupDescriptor>>;

    /// `GET /health`
    async fn health(&self) -> Result<HealthStatus>;
}

/// [`Backend`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackend {
    transport: Transport,
}

impl HttpBackend {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let value = self.transport.call(path, Method::GET, None).await?;
        decode(path, value)
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: Option<&Value>) -> Result<T> {
        let value = self.transport.call(path, Method::POST, body).await?;
        decode(path, value)
    }

    /// POST whose acknowledgement body carries nothing we need
    async fn post_ack(&self, path: &str, body: Option<&Value>) -> Result<()> {
        self.transport.call(path, Method::POST, body).await?;
        Ok(())
    }

    async fn catalog_query<T: DeserializeOwned>(
        &self,
        path: &str,
        blueprint_id: i64,
        print_provider_id: i64,
    ) -> Result<T> {
        let query = [
            ("blueprint_id", blueprint_id.to_string()),
            ("print_provider_id", print_provider_id.to_string()),
        ];
        let value = self
            .transport
            .call_with_query(path, Method::GET, &query, None)
            .await?;
        decode(path, value)
    }
}

fn decode<T: DeserializeOwned>(path: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| {
        warn!("Unexpected response shape from {}: {}", path, e);
        Error::request_failure(format!("Unexpected response from {path}: {e}"))
    })
}

impl Backend for HttpBackend {
    async fn get_settings(&self) -> Result<Settings> {
        self.get("/settings").await
    }

    async fn save_settings(&self, settings: &Settings) -> Result<()> {
        let body = serde_json::to_value(settings)?;
        self.post_ack("/settings", Some(&body)).await
    }

    async fn reset_settings(&self) -> Result<()> {
        self.post_ack("/settings/reset", None).await
    }

    async fn monitor_status(&self) -> Result<MonitorStatus> {
        self.get("/monitor/status").await
    }

    async fn start_monitor(&self) -> Result<()> {
        self.post_ack("/monitor/start", None).await
    }

    async fn stop_monitor(&self) -> Result<()> {
        self.post_ack("/monitor/stop", None).await
    }

    async fn dashboard(&self) -> Result<DashboardStats> {
        self.get("/dashboard").await
    }

    async fn runs(&self) -> Result<Vec<Value>> {
        self.get("/runs").await
    }

    async fn logs(&self) -> Result<Vec<Value>> {
        self.get("/logs").await
    }

    async fn analyze(&self, image_path: &str) -> Result<AnalysisResult> {
        let body = serde_json::to_value(ImagePathRequest {
            image_path: image_path.to_string(),
        })?;
        self.post("/analyze", Some(&body)).await
    }

    async fn create_draft(&self, request: &DraftRequest) -> Result<DraftCreated> {
        let body = serde_json::to_value(request)?;
        self.post("/draft", Some(&body)).await
    }

    async fn queue(&self, image_path: &str) -> Result<QueuedItem> {
        let body = serde_json::to_value(ImagePathRequest {
            image_path: image_path.to_string(),
        })?;
        self.post("/queue", Some(&body)).await
    }

    async fn variants(
        &self,
        blueprint_id: i64,
        print_provider_id: i64,
    ) -> Result<Vec<CatalogVariant>> {
        let response: VariantsResponse = self
            .catalog_query("/printify/variants", blueprint_id, print_provider_id)
            .await?;
        Ok(response.variants)
    }

    async fn mockups(
        &self,
        blueprint_id: i64,
        print_provider_id: i64,
    ) -> Result<Vec<MockupDescriptor>> {
        let response: MockupsResponse = self
            .catalog_query("/printify/mockups", blueprint_id, print_provider_id)
            .await?;
        Ok(response.mockups)
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.get("/health").await
    }
}
