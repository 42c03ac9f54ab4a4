// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use serde_json::Value;
use tower::util::ServiceExt as _;

use inkwell_blog::application::ports::time::Clock;
use inkwell_blog::application::services::ApplicationServices;
use inkwell_blog::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use inkwell_blog::domain::category::CategoryRepository;
use inkwell_blog::domain::comment::CommentRepository;
use inkwell_blog::domain::services::SlugGenerator;
use inkwell_blog::presentation::http::extractors::AdminToken;
use inkwell_blog::presentation::http::routes::{RouterOptions, build_router};
use inkwell_blog::presentation::http::state::HttpState;

use super::mocks::{DummyClock, DummySlug, InMemoryBlog};

pub const ADMIN_TOKEN: &str = "test-admin-token-0123456789";

pub fn build_test_state(store: Arc<InMemoryBlog>, admin_enabled: bool) -> HttpState {
    let article_write: Arc<dyn ArticleWriteRepository> = store.clone();
    let article_read: Arc<dyn ArticleReadRepository> = store.clone();
    let categories: Arc<dyn CategoryRepository> = store.clone();
    let comments: Arc<dyn CommentRepository> = store;
    let clock: Arc<dyn Clock> = Arc::new(DummyClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DummySlug);

    let services = Arc::new(ApplicationServices::new(
        article_write,
        article_read,
        categories,
        comments,
        clock,
        slugger,
    ));

    HttpState {
        services,
        admin_token: admin_enabled.then(|| AdminToken::new(ADMIN_TOKEN)),
    }
}

fn test_options() -> RouterOptions {
    RouterOptions {
        rate_limit: false,
        allowed_origins: vec!["http://localhost:3000".into()],
    }
}

/// Router with admin routes mounted and rate limiting off (oneshot requests
/// carry no peer address for the limiter to key on).
pub fn make_test_router(store: Arc<InMemoryBlog>) -> Router {
    build_router(build_test_state(store, true), test_options())
}

pub fn make_public_router(store: Arc<InMemoryBlog>) -> Router {
    build_router(build_test_state(store, false), test_options())
}

pub async fn send(app: &Router, req: Request<Body>) -> Response {
    app.clone().oneshot(req).await.expect("router is infallible")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn form_post(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let body = serde_urlencoded::to_string(fields).unwrap();
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

/// Admin request carrying the test bearer token. `body` of `None` sends no
/// payload.
pub fn admin_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {ADMIN_TOKEN}"));
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected JSON body")
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Assert that a response is an error JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
}
