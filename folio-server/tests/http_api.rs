//! End-to-end API tests against a real database
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p folio-server --test http_api -- --ignored

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use folio_server::db::repos::PortfolioRepo;
use folio_server::db::{create_pool, migrations};
use folio_server::{build_router, AppState};

async fn test_app(uploads_dir: PathBuf) -> Router {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = create_pool(&url).await.expect("pool creation failed");
    migrations::run(&pool).await.expect("bootstrap failed");
    PortfolioRepo::new(&pool)
        .initialize()
        .await
        .expect("seed failed");

    build_router(
        Arc::new(AppState { pool, uploads_dir }),
        Duration::from_secs(10),
    )
}

async fn body_json(body: Body) -> Value {
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
#[ignore = "requires database"]
async fn portfolio_is_seeded_on_fresh_store() {
    let app = test_app(std::env::temp_dir()).await;

    let response = app.oneshot(get("/api/portfolio")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["success"], Value::Bool(true));
    assert_eq!(body["data"]["id"], "portfolio-primary");
    assert!(body["data"]["skills"]["programming"].is_array());
}

#[tokio::test]
#[ignore = "requires database"]
async fn portfolio_patch_roundtrip() {
    let app = test_app(std::env::temp_dir()).await;

    let marker = format!("e2e summary {}", Uuid::new_v4());
    let patch = format!(r#"{{"summary": "{marker}"}}"#);
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/portfolio", &patch))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/api/portfolio")).await.unwrap();
    let body = body_json(response.into_body()).await;
    assert_eq!(body["data"]["summary"], Value::String(marker));
}

#[tokio::test]
#[ignore = "requires database"]
async fn resume_upload_download_roundtrip() {
    let uploads = tempfile::tempdir().expect("tempdir");
    let app = test_app(uploads.path().to_path_buf()).await;

    let boundary = "folio-e2e-boundary";
    let pdf_bytes = b"%PDF-1.4 minimal".to_vec();
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"resume.pdf\"\r\n\
             Content-Type: application/pdf\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(&pdf_bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/resume/upload")
                .header(
                    "content-type",
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/api/resume/download")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(bytes.as_ref(), pdf_bytes.as_slice());
}

#[tokio::test]
#[ignore = "requires database"]
async fn contact_validation_keeps_store_clean() {
    let app = test_app(std::env::temp_dir()).await;

    let marker = format!("e2e subject {}", Uuid::new_v4());
    let invalid = format!(r#"{{"name": "A", "email": "a@x.com", "subject": "{marker}"}}"#);
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/contact", &invalid))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get("/api/contact")).await.unwrap();
    let body = body_json(response.into_body()).await;
    let submissions = body["data"]["submissions"].as_array().unwrap();
    assert!(submissions.iter().all(|s| s["subject"] != marker.as_str()));
}

#[tokio::test]
#[ignore = "requires database"]
async fn contact_submission_roundtrip() {
    let app = test_app(std::env::temp_dir()).await;

    let marker = format!("e2e subject {}", Uuid::new_v4());
    let valid = format!(
        r#"{{"name": "A", "email": "a@x.com", "subject": "{marker}", "message": "M"}}"#
    );
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/contact", &valid))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.into_body()).await;
    let id = body["data"]["submission_id"].as_str().unwrap().to_string();

    let response = app.oneshot(get("/api/contact")).await.unwrap();
    let body = body_json(response.into_body()).await;
    let submissions = body["data"]["submissions"].as_array().unwrap();
    let stored = submissions
        .iter()
        .find(|s| s["id"] == id.as_str())
        .expect("submission missing from listing");
    assert_eq!(stored["name"], "A");
    assert_eq!(stored["email"], "a@x.com");
    assert_eq!(stored["message"], "M");
    assert_eq!(stored["status"], "new");
}

#[tokio::test]
#[ignore = "requires database"]
async fn visit_stats_monotonicity() {
    let app = test_app(std::env::temp_dir()).await;

    let response = app.clone().oneshot(get("/api/analytics/stats")).await.unwrap();
    let before = body_json(response.into_body()).await;

    for _ in 0..2 {
        let ip = format!("198.51.100.1/{}", Uuid::new_v4());
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/analytics/visit?page=/e2e")
                    .header("x-forwarded-for", ip)
                    .header("user-agent", "e2e-agent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response.into_body()).await;
        assert_eq!(body["success"], Value::Bool(true));
    }

    let response = app.oneshot(get("/api/analytics/stats")).await.unwrap();
    let after = body_json(response.into_body()).await;
    assert_eq!(
        after["data"]["total_visits"].as_i64().unwrap(),
        before["data"]["total_visits"].as_i64().unwrap() + 2
    );
    assert_eq!(
        after["data"]["unique_visitors"].as_i64().unwrap(),
        before["data"]["unique_visitors"].as_i64().unwrap() + 2
    );
}
