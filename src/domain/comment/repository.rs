// src/domain/comment/repository.rs
use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Moderation listing filter. `created_between` is a half-open range.
#[derive(Debug, Clone, Default)]
pub struct CommentFilter {
    pub approved: Option<bool>,
    pub created_between: Option<(DateTime<Utc>, DateTime<Utc>)>,
}

impl CommentFilter {
    pub fn matches(&self, comment: &Comment) -> bool {
        if let Some(approved) = self.approved {
            if comment.approved != approved {
                return false;
            }
        }
        if let Some((start, end)) = self.created_between {
            if comment.created_date < start || comment.created_date >= end {
                return false;
            }
        }
        true
    }
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    async fn set_approved(&self, id: CommentId, approved: bool) -> DomainResult<Comment>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
    /// Approved comments of one article, oldest first.
    async fn list_approved_for_article(&self, article_id: ArticleId)
    -> DomainResult<Vec<Comment>>;
    async fn count(&self, filter: &CommentFilter) -> DomainResult<u64>;
    /// Newest first by `created_date`, ties broken by descending id.
    async fn list_page(
        &self,
        filter: &CommentFilter,
        offset: u64,
        limit: u32,
    ) -> DomainResult<Vec<Comment>>;
}
