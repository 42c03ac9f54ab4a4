// src/presentation/http/controllers/admin_comments.rs
use crate::application::{
    commands::comments::{DeleteCommentCommand, SetApprovalCommand},
    dto::{CommentDto, ModerationCommentDto, Page},
    queries::comments::ListCommentsQuery,
};
use crate::domain::comment::CreatedWithin;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Default, Deserialize)]
pub struct CommentListParams {
    #[serde(default)]
    pub approved: Option<bool>,
    #[serde(default)]
    pub created: Option<CreatedWithin>,
    #[serde(default)]
    pub page: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApprovalRequest {
    pub approved: bool,
}

pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthenticated,
    Query(params): Query<CommentListParams>,
) -> HttpResult<Json<Page<ModerationCommentDto>>> {
    let query = ListCommentsQuery {
        approved: params.approved,
        created: params.created,
        page: params.page,
    };

    state
        .services
        .comment_queries
        .list_comments(query)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_comment(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ModerationCommentDto>> {
    state
        .services
        .comment_queries
        .get_comment(id)
        .await
        .into_http()
        .map(Json)
}

pub async fn set_approval(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthenticated,
    Path(id): Path<i64>,
    Json(payload): Json<ApprovalRequest>,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .comment_commands
        .set_approval(SetApprovalCommand {
            id,
            approved: payload.approved,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .comment_commands
        .delete_comment(DeleteCommentCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
