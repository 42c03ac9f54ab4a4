// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::{
    application::{ports::time::Clock, queries::articles::ArticleQueryService},
    domain::comment::CommentRepository,
};

pub struct CommentCommandService {
    pub(super) repo: Arc<dyn CommentRepository>,
    pub(super) article_queries: Arc<ArticleQueryService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        repo: Arc<dyn CommentRepository>,
        article_queries: Arc<ArticleQueryService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            article_queries,
            clock,
        }
    }
}
