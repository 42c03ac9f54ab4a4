use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use std::sync::Arc;

mod support;

use support::{
    InMemoryBlog, assert_error_response, body_json, days_ago, fixed_now, form_post, get,
    location, make_public_router, send,
};

fn authors(view: &Value) -> Vec<String> {
    view["comments"]
        .as_array()
        .expect("comments array")
        .iter()
        .map(|c| c["author"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn detail_shows_only_approved_comments_oldest_first() {
    let store = Arc::new(InMemoryBlog::new());
    let article = store.seed_article("Hello", "hello", days_ago(3), None);
    store.seed_comment(article.id, "Bea", "second", days_ago(1), true);
    store.seed_comment(article.id, "Spam", "buy now", days_ago(2), false);
    store.seed_comment(article.id, "Ann", "first", days_ago(2), true);
    let app = make_public_router(store);

    let resp = send(&app, get("/article/hello/")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let view = body_json(resp).await;

    assert_eq!(view["article"]["slug"], "hello");
    assert_eq!(view["article"]["title"], "Hello");
    assert_eq!(authors(&view), ["Ann", "Bea"]);
    assert_eq!(view["comment_form"]["author"], "");
    assert_eq!(view["comment_form"]["content"], "");
    assert!(view["comment_form"]["errors"].as_object().unwrap().is_empty());
}

#[tokio::test]
async fn valid_comment_is_stored_and_redirects_to_the_article() {
    let store = Arc::new(InMemoryBlog::new());
    let article = store.seed_article("Hello", "hello", days_ago(3), None);
    let app = make_public_router(Arc::clone(&store));

    let resp = send(
        &app,
        form_post("/article/hello/", &[("author", "Ann"), ("content", "Nice post")]),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/article/hello/");

    let stored = store.comments_of(article.id);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].author.as_str(), "Ann");
    assert_eq!(stored[0].content.as_str(), "Nice post");
    assert!(stored[0].approved);
    assert_eq!(stored[0].created_date, fixed_now());

    let view = body_json(send(&app, get("/article/hello/")).await).await;
    assert_eq!(authors(&view), ["Ann"]);
}

#[tokio::test]
async fn resubmitting_the_same_comment_stores_a_duplicate() {
    let store = Arc::new(InMemoryBlog::new());
    let article = store.seed_article("Hello", "hello", days_ago(3), None);
    let app = make_public_router(Arc::clone(&store));

    for _ in 0..2 {
        let resp = send(
            &app,
            form_post("/article/hello/", &[("author", "Ann"), ("content", "Again")]),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    }
    assert_eq!(store.comments_of(article.id).len(), 2);
}

#[tokio::test]
async fn empty_content_re_renders_the_page_with_errors() {
    let store = Arc::new(InMemoryBlog::new());
    let article = store.seed_article("Hello", "hello", days_ago(3), None);
    store.seed_comment(article.id, "Ann", "first", days_ago(2), true);
    let app = make_public_router(Arc::clone(&store));

    let resp = send(
        &app,
        form_post("/article/hello/", &[("author", "Bob"), ("content", "   ")]),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let view = body_json(resp).await;

    let form = &view["comment_form"];
    assert_eq!(form["author"], "Bob");
    assert_eq!(form["errors"]["content"][0], "This field is required.");
    assert!(form["errors"].get("author").is_none());
    assert_eq!(authors(&view), ["Ann"]);
    assert_eq!(store.comments_of(article.id).len(), 1);
}

#[tokio::test]
async fn missing_fields_and_long_author_are_reported_per_field() {
    let store = Arc::new(InMemoryBlog::new());
    let article = store.seed_article("Hello", "hello", days_ago(3), None);
    let app = make_public_router(Arc::clone(&store));

    let resp = send(&app, form_post("/article/hello/", &[])).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let view = body_json(resp).await;
    assert_eq!(view["comment_form"]["errors"]["author"][0], "This field is required.");
    assert_eq!(view["comment_form"]["errors"]["content"][0], "This field is required.");

    let long_author = "x".repeat(81);
    let resp = send(
        &app,
        form_post("/article/hello/", &[("author", &long_author), ("content", "hi")]),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let view = body_json(resp).await;
    assert_eq!(
        view["comment_form"]["errors"]["author"][0],
        "Ensure this value has at most 80 characters (it has 81)."
    );

    assert!(store.comments_of(article.id).is_empty());
}

#[tokio::test]
async fn unknown_slug_is_not_found_for_both_methods() {
    let store = Arc::new(InMemoryBlog::new());
    store.seed_article("Hello", "hello", days_ago(3), None);
    let app = make_public_router(Arc::clone(&store));

    let resp = send(&app, get("/article/nope/")).await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;

    let resp = send(
        &app,
        form_post("/article/nope/", &[("author", "Ann"), ("content", "hi")]),
    )
    .await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
    assert_eq!(store.comment_count(), 0);
}

#[tokio::test]
async fn malformed_slug_is_not_found() {
    let app = make_public_router(Arc::new(InMemoryBlog::new()));

    let resp = send(&app, get("/article/not%20a%20slug/")).await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn malformed_slug_without_trailing_slash_is_not_found() {
    let app = make_public_router(Arc::new(InMemoryBlog::new()));

    let resp = send(&app, get("/article/a%0Ab")).await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn non_form_comment_to_unknown_article_is_not_found() {
    let store = Arc::new(InMemoryBlog::new());
    let app = make_public_router(Arc::clone(&store));

    let resp = send(&app, json_post("/article/nope/", r#"{"author":"Ann","content":"hi"}"#)).await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
    assert_eq!(store.comment_count(), 0);
}

#[tokio::test]
async fn non_form_comment_re_renders_with_required_errors() {
    let store = Arc::new(InMemoryBlog::new());
    let article = store.seed_article("Hello", "hello", days_ago(3), None);
    let app = make_public_router(Arc::clone(&store));

    let resp = send(&app, json_post("/article/hello/", r#"{"author":"Ann","content":"hi"}"#)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let view = body_json(resp).await;
    let errors = &view["comment_form"]["errors"];
    assert_eq!(errors["author"][0], "This field is required.");
    assert_eq!(errors["content"][0], "This field is required.");
    assert!(store.comments_of(article.id).is_empty());
}

#[tokio::test]
async fn repeated_comment_field_keeps_the_last_value() {
    let store = Arc::new(InMemoryBlog::new());
    let article = store.seed_article("Hello", "hello", days_ago(3), None);
    let app = make_public_router(Arc::clone(&store));

    let resp = send(
        &app,
        form_post("/article/hello/", &[("author", "a"), ("author", "b"), ("content", "hi")]),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/article/hello/");

    let stored = store.comments_of(article.id);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].author.as_str(), "b");
}

#[tokio::test]
async fn path_without_trailing_slash_redirects_permanently() {
    let app = make_public_router(Arc::new(InMemoryBlog::new()));

    let resp = send(&app, get("/article/hello")).await;
    assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location(&resp), "/article/hello/");
}

#[tokio::test]
async fn health_reports_ok() {
    let app = make_public_router(Arc::new(InMemoryBlog::new()));

    let resp = send(&app, get("/health")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["status"], "ok");
}
