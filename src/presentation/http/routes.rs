// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{
    admin_articles, admin_categories, admin_comments, blog,
};
use crate::presentation::http::middleware::rate_limit_layer;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub rate_limit: bool,
    pub allowed_origins: Vec<String>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            rate_limit: true,
            allowed_origins: Vec::new(),
        }
    }
}

pub fn build_router(state: HttpState, options: RouterOptions) -> Router {
    let mut public = Router::new()
        .route("/", get(blog::home))
        .route(
            "/article/{slug}/",
            get(blog::article_detail).post(blog::submit_comment),
        )
        .route("/article/{slug}", get(blog::article_detail_without_slash));

    if options.rate_limit {
        public = public.layer(rate_limit_layer());
    }

    let mut router = Router::new()
        .route("/health", get(health))
        .merge(public);

    if state.admin_token.is_some() {
        router = router.nest("/admin", admin_router());
    } else {
        tracing::info!("ADMIN_TOKEN not set; admin routes disabled");
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn admin_router() -> Router {
    Router::new()
        .route(
            "/categories",
            get(admin_categories::list_categories).post(admin_categories::create_category),
        )
        .route(
            "/categories/{id}",
            get(admin_categories::get_category)
                .put(admin_categories::update_category)
                .delete(admin_categories::delete_category),
        )
        .route(
            "/articles",
            get(admin_articles::list_articles).post(admin_articles::create_article),
        )
        .route(
            "/articles/{id}",
            get(admin_articles::get_article)
                .put(admin_articles::update_article)
                .delete(admin_articles::delete_article),
        )
        .route("/comments", get(admin_comments::list_comments))
        .route(
            "/comments/{id}",
            get(admin_comments::get_comment)
                .patch(admin_comments::set_approval)
                .delete(admin_comments::delete_comment),
        )
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
