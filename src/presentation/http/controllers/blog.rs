// src/presentation/http/controllers/blog.rs
//! Public pages: the article listing and the article detail page with its
//! comment form.
use crate::application::{
    commands::comments::{CommentForm, SubmitCommentCommand, SubmitCommentOutcome},
    dto::{ArticleDetailView, HomeView, articles::detail_path},
    queries::articles::{GetArticleDetailQuery, HomePageQuery},
};
use crate::application::error::ApplicationError;
use crate::domain::article::ArticleSlug;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Form, Json,
    extract::{Path, Query, rejection::FormRejection},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct HomeParams {
    /// Kept raw; the paginator decides what an unusable value means.
    #[serde(default)]
    pub page: Option<String>,
}

pub async fn home(
    Extension(state): Extension<HttpState>,
    Query(params): Query<HomeParams>,
) -> HttpResult<Json<HomeView>> {
    state
        .services
        .article_queries
        .home_page(HomePageQuery { page: params.page })
        .await
        .into_http()
        .map(Json)
}

pub async fn article_detail(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDetailView>> {
    state
        .services
        .article_queries
        .article_detail(GetArticleDetailQuery { slug })
        .await
        .into_http()
        .map(Json)
}

pub async fn submit_comment(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    body: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> HttpResult<Response> {
    // An unreadable body is an empty form; the article lookup still decides 404.
    let form = match body {
        Ok(Form(pairs)) => CommentForm::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "comment body not parsed as a form");
            CommentForm::default()
        }
    };

    let outcome = state
        .services
        .comment_commands
        .submit_comment(SubmitCommentCommand { slug, form })
        .await
        .into_http()?;

    let response = match outcome {
        SubmitCommentOutcome::Created { redirect_to, .. } => {
            Redirect::to(&redirect_to).into_response()
        }
        SubmitCommentOutcome::Invalid(view) => Json(*view).into_response(),
    };
    Ok(response)
}

pub async fn article_detail_without_slash(Path(slug): Path<String>) -> HttpResult<Redirect> {
    let slug = ArticleSlug::new(slug)
        .map_err(|_| HttpError::from_error(ApplicationError::not_found("article not found")))?;
    Ok(Redirect::permanent(&detail_path(slug.as_str())))
}
