// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{ArticleReadRepository, ArticleSlug, ArticleTitle, ArticleWriteRepository},
        category::{Category, CategoryId, CategoryRepository},
        services::SlugService,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        slug_service: Arc<SlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            slug_service,
            clock,
        }
    }

    /// An explicit, non-blank slug is taken as-is; otherwise one is
    /// prepopulated from the title.
    pub(super) async fn resolve_slug(
        &self,
        explicit: Option<String>,
        title: &ArticleTitle,
    ) -> ApplicationResult<ArticleSlug> {
        match explicit.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) {
            Some(slug) => Ok(ArticleSlug::new(slug)?),
            None => Ok(self
                .slug_service
                .unique_article_slug(title)
                .await?),
        }
    }

    pub(super) async fn resolve_category(
        &self,
        category_id: Option<i64>,
    ) -> ApplicationResult<Option<Category>> {
        let Some(raw) = category_id else {
            return Ok(None);
        };
        let id = CategoryId::new(raw)?;
        let category = self
            .category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("category {raw} not found")))?;
        Ok(Some(category))
    }
}
