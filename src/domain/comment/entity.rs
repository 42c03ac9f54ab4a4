// src/domain/comment/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::{CommentAuthor, CommentContent, CommentId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author: CommentAuthor,
    pub content: CommentContent,
    pub created_date: DateTime<Utc>,
    pub approved: bool,
}

impl Comment {
    pub fn is_visible(&self) -> bool {
        self.approved
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub author: CommentAuthor,
    pub content: CommentContent,
    pub created_date: DateTime<Utc>,
    pub approved: bool,
}

impl NewComment {
    /// Visitor submissions are visible immediately.
    pub fn submitted(
        article_id: ArticleId,
        author: CommentAuthor,
        content: CommentContent,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            article_id,
            author,
            content,
            created_date: now,
            approved: true,
        }
    }
}
