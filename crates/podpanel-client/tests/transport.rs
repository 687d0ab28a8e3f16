//! Transport and HttpBackend against a local HTTP server

use std::collections::HashMap;
use std::time::Duration;

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use reqwest::Method;
use serde_json::{json, Value};

use podpanel_client::{Backend, DraftRequest, HttpBackend, Transport};
use podpanel_core::Error;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn transport(base: &str) -> Transport {
    Transport::new(base, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_error_status_uses_detail_field() {
    let app = Router::new().route(
        "/api/analyze",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"detail": "Image path not found"})),
            )
        }),
    );
    let base = serve(app).await;

    let err = transport(&base)
        .call("/analyze", Method::POST, Some(&json!({"image_path": "x"})))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::RequestFailure { .. }));
    assert_eq!(err.detail(), "Image path not found");
}

#[tokio::test]
async fn test_error_status_without_detail_serializes_body() {
    let app = Router::new().route(
        "/api/dashboard",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "db"})),
            )
        }),
    );
    let base = serve(app).await;

    let err = transport(&base)
        .call("/dashboard", Method::GET, None)
        .await
        .unwrap_err();
    assert_eq!(err.detail(), r#"{"error":"db"}"#);
}

#[tokio::test]
async fn test_error_status_with_plain_text_body() {
    let app = Router::new().route(
        "/api/runs",
        get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
    );
    let base = serve(app).await;

    let err = transport(&base)
        .call("/runs", Method::GET, None)
        .await
        .unwrap_err();
    assert_eq!(err.detail(), "upstream down");
}

#[tokio::test]
async fn test_requests_carry_json_content_type() {
    let app = Router::new().route(
        "/api/monitor/start",
        post(|headers: HeaderMap| async move {
            let content_type = headers
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            Json(json!({"content_type": content_type}))
        }),
    );
    let base = serve(app).await;

    let value = transport(&base)
        .call("/monitor/start", Method::POST, None)
        .await
        .unwrap();
    assert_eq!(value["content_type"], json!("application/json"));
}

#[tokio::test]
async fn test_connection_refused_is_request_failure() {
    // Bind then drop to get a port nobody listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = transport(&format!("http://{addr}"))
        .call("/health", Method::GET, None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::RequestFailure { .. }));
    assert!(err.is_recoverable());
}

#[tokio::test]
async fn test_backend_decodes_settings_with_null_selections() {
    let app = Router::new().route(
        "/api/settings",
        get(|| async {
            Json(json!({
                "watch_folder": "/art/in",
                "printify_api_key": "k",
                "printify_shop_id": "42",
                "blueprint_id": 6,
                "print_provider_id": 99,
                "base_price": null,
                "profit_percent": 35.0,
                "copy_previous": true,
                "selected_variants": null,
                "selected_mockups": null
            }))
        }),
    );
    let base = serve(app).await;

    let settings = HttpBackend::new(transport(&base))
        .get_settings()
        .await
        .unwrap();
    assert_eq!(settings.watch_folder, "/art/in");
    assert_eq!(settings.blueprint_id, 6);
    assert!(settings.selected_variants.is_empty());
    assert!(settings.selected_mockups.is_empty());
}

#[tokio::test]
async fn test_backend_variants_sends_catalog_query() {
    let app = Router::new().route(
        "/api/printify/variants",
        get(|Query(q): Query<HashMap<String, String>>| async move {
            Json(json!({
                "variants": [
                    {"id": 1, "title": format!("bp {}", q["blueprint_id"]), "price": 1500},
                    {"id": 2, "title": format!("pp {}", q["print_provider_id"]), "price": 16.4}
                ]
            }))
        }),
    );
    let base = serve(app).await;

    let variants = HttpBackend::new(transport(&base))
        .variants(6, 99)
        .await
        .unwrap();
    assert_eq!(variants.len(), 2);
    assert_eq!(variants[0].title.as_deref(), Some("bp 6"));
    assert_eq!(variants[1].title.as_deref(), Some("pp 99"));
    assert_eq!(variants[0].price, Some(1500));
}

#[tokio::test]
async fn test_backend_draft_posts_nulls_without_analysis() {
    let app = Router::new().route(
        "/api/draft",
        post(|Json(body): Json<Value>| async move {
            if body["analysis"].is_null() && body["listing"].is_null() {
                (
                    StatusCode::OK,
                    Json(json!({"printify_product_id": "65f0", "printify_upload_id": "u1"})),
                )
            } else {
                (StatusCode::BAD_REQUEST, Json(json!({"detail": "unexpected body"})))
            }
        }),
    );
    let base = serve(app).await;

    let created = HttpBackend::new(transport(&base))
        .create_draft(&DraftRequest::new("img.png", None))
        .await
        .unwrap();
    assert_eq!(created.printify_product_id.as_deref(), Some("65f0"));
}

#[tokio::test]
async fn test_backend_analyze_accepts_loose_model_output() {
    let payload = json!({
        "analysis": {
            "theme": null,
            "objects": {"primary": "cat"},
            "target_audience": ["gamers", "teens"],
            "caption": "Nap time"
        },
        "listing": {"title": "Cat Tee", "bullets": ["soft", 2], "tags": null}
    });
    let body = payload.clone();
    let app = Router::new().route(
        "/api/analyze",
        post(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    );
    let base = serve(app).await;

    let backend = HttpBackend::new(transport(&base));
    let result = backend.analyze("cat.png").await.unwrap();
    assert_eq!(result.analysis, payload["analysis"]);
    assert!(result.summary().contains("BULLETS:\n• soft\n• 2"));

    let draft = serde_json::to_value(DraftRequest::new("cat.png", Some(&result))).unwrap();
    assert_eq!(draft["analysis"], payload["analysis"]);
    assert_eq!(draft["listing"], payload["listing"]);
}
