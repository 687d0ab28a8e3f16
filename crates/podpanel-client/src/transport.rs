//! Request/response exchange with the backend API
//!
//! Every call is a single attempt: JSON in, JSON out, and any non-success
//! outcome becomes [`Error::RequestFailure`] carrying the text to show the
//! user. Network failures and application-level rejections are not
//! distinguished.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;
use url::Url;

use podpanel_core::prelude::*;

/// Path prefix under which the backend mounts its router
pub const API_PREFIX: &str = "/api";

/// HTTP transport bound to one backend base URL
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    base_url: Url,
}

impl Transport {
    /// Build a transport for `base_url` (e.g. `http://127.0.0.1:8000`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::config_invalid(format!("api base url '{base_url}': {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("http client: {e}")))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL for an endpoint path such as `/settings`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            API_PREFIX,
            path
        )
    }

    /// Perform one exchange and decode the JSON response.
    pub async fn call(&self, path: &str, method: Method, body: Option<&Value>) -> Result<Value> {
        self.call_with_query(path, method, &[], body).await
    }

    /// Like [`Transport::call`], with query-string parameters.
    pub async fn call_with_query(
        &self,
        path: &str,
        method: Method,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Value> {
        debug!("{} {}", method, path);

        let mut request = self.http.request(method.clone(), self.endpoint(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        // Content-Type is a default header; the body is pre-encoded so the
        // header is sent even for body-less POSTs.
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().await.map_err(|e| {
            warn!("{} {} failed: {}", method, path, e);
            Error::request_failure(e.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::request_failure(e.to_string()))?;

        let payload = decode_body(&text);

        if !status.is_success() {
            let detail = match &payload {
                Ok(value) => failure_detail(value),
                Err(_) if text.trim().is_empty() => status.to_string(),
                Err(_) => text,
            };
            debug!("{} {} -> {}: {}", method, path, status, detail);
            return Err(Error::request_failure(detail));
        }

        payload.map_err(|e| {
            warn!("{} {} returned undecodable body: {}", method, path, e);
            Error::request_failure(format!("Invalid JSON response: {e}"))
        })
    }
}

fn decode_body(text: &str) -> std::result::Result<Value, serde_json::Error> {
    serde_json::from_str(text)
}

/// Error text for a failed response body.
///
/// Uses the `detail` field when present (strings verbatim, other values
/// serialized); otherwise the whole body serialized as JSON.
pub fn failure_detail(body: &Value) -> String {
    match body.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        Some(detail) if !is_empty_detail(detail) => detail.to_string(),
        _ => body.to_string(),
    }
}

fn is_empty_detail(detail: &Value) -> bool {
    match detail {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
