// src/application/dto/comments.rs
use crate::domain::{article::Article, comment::Comment};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: i64,
    pub author: String,
    pub content: String,
    #[serde(with = "serde_time")]
    pub created_date: DateTime<Utc>,
    pub approved: bool,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            author: comment.author.into_inner(),
            content: comment.content.into_inner(),
            created_date: comment.created_date,
            approved: comment.approved,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentArticleRef {
    pub id: i64,
    pub title: String,
    pub slug: String,
}

impl From<&Article> for CommentArticleRef {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.to_string(),
            slug: article.slug.to_string(),
        }
    }
}

/// Row of the moderation listing: article, author, creation date, approval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationCommentDto {
    pub id: i64,
    pub article: Option<CommentArticleRef>,
    pub author: String,
    pub content: String,
    #[serde(with = "serde_time")]
    pub created_date: DateTime<Utc>,
    pub approved: bool,
}

impl ModerationCommentDto {
    pub fn from_parts(comment: Comment, article: Option<&Article>) -> Self {
        Self {
            id: comment.id.into(),
            article: article.map(CommentArticleRef::from),
            author: comment.author.into_inner(),
            content: comment.content.into_inner(),
            created_date: comment.created_date,
            approved: comment.approved,
        }
    }
}
