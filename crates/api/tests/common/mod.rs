#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use estate_api::config::ServerConfig;
use estate_api::listing::ApartmentService;
use estate_api::router::build_app_router;
use estate_api::state::AppState;
use estate_media::{MediaUploader, UploadError, UploadFile};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Boundary used by [`Multipart`] bodies.
const BOUNDARY: &str = "estate-test-boundary";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: 1024 * 1024,
    }
}

/// Build the full application router backed by a [`StubUploader`] that
/// accepts every file.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_uploader(pool, Arc::new(StubUploader::default()))
}

/// Build the full application router with the given uploader.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app_with_uploader(pool: PgPool, uploader: Arc<StubUploader>) -> Router {
    let config = test_config();
    let state = AppState {
        pool: pool.clone(),
        apartments: Arc::new(ApartmentService::new(pool, uploader)),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Media host stub
// ---------------------------------------------------------------------------

/// In-memory uploader that records file names in call order and returns
/// `https://media.test/{n}/{name}` URLs. Empty files are refused the way the
/// Cloudinary uploader refuses them, before anything is recorded.
#[derive(Default)]
pub struct StubUploader {
    pub calls: Mutex<Vec<String>>,
    /// Reject the file with this name.
    pub fail_on: Option<String>,
}

impl StubUploader {
    pub fn failing_on(name: &str) -> Self {
        Self {
            fail_on: Some(name.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaUploader for StubUploader {
    async fn upload(&self, file: &UploadFile) -> Result<String, UploadError> {
        let name = file.display_name().to_string();
        if file.bytes.is_empty() {
            return Err(UploadError::EmptyFile(name));
        }
        let mut calls = self.calls.lock().unwrap();
        calls.push(name.clone());
        if self.fail_on.as_deref() == Some(name.as_str()) {
            return Err(UploadError::Rejected {
                status: 500,
                body: "stub failure".into(),
            });
        }
        Ok(format!("https://media.test/{}/{name}", calls.len()))
    }
}

// ---------------------------------------------------------------------------
// Multipart body builder
// ---------------------------------------------------------------------------

/// Minimal `multipart/form-data` body builder.
#[derive(Default)]
pub struct Multipart {
    body: Vec<u8>,
}

impl Multipart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; \
                 filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Attach a small PNG-typed file under the `images` field.
    pub fn image(self, file_name: &str) -> Self {
        self.file("images", file_name, "image/png", b"\x89PNG fake image")
    }

    fn finish(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }
}

/// The form fields of a valid apartment.
pub fn valid_form() -> Multipart {
    Multipart::new()
        .text("unitName", "A1")
        .text("unitNumber", "101")
        .text("project", "Lakeview")
        .text("price", "1200")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::delete(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_multipart(app: Router, uri: &str, form: Multipart) -> Response<Body> {
    send_multipart(app, "POST", uri, form).await
}

pub async fn patch_multipart(app: Router, uri: &str, form: Multipart) -> Response<Body> {
    send_multipart(app, "PATCH", uri, form).await
}

async fn send_multipart(app: Router, method: &str, uri: &str, form: Multipart) -> Response<Body> {
    let content_type = format!("multipart/form-data; boundary={BOUNDARY}");
    send_body(app, method, uri, &content_type, form.finish()).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_body(app, "POST", uri, "application/json", body.to_string()).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_body(app, "PATCH", uri, "application/json", body.to_string()).await
}

/// Send `body` with an explicit `content-type` header.
pub async fn send_body(
    app: Router,
    method: &str,
    uri: &str,
    content_type: &str,
    body: impl Into<Body>,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", content_type)
        .body(body.into())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create an apartment through the API and return its JSON representation.
pub async fn create_apartment(pool: &PgPool, form: Multipart) -> serde_json::Value {
    let response = post_multipart(build_test_app(pool.clone()), "/api/apartments", form).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}
