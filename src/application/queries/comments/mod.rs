// src/application/queries/comments/mod.rs
use std::{collections::HashMap, sync::Arc};

use crate::{
    application::{
        dto::{ADMIN_PAGE_SIZE, ModerationCommentDto, Page, Paginator},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{Article, ArticleId, ArticleReadRepository},
        comment::{CommentFilter, CommentId, CommentRepository, CreatedWithin},
    },
};

/// Moderation listing parameters.
#[derive(Debug, Default)]
pub struct ListCommentsQuery {
    pub approved: Option<bool>,
    pub created: Option<CreatedWithin>,
    pub page: Option<String>,
}

pub struct CommentQueryService {
    repo: Arc<dyn CommentRepository>,
    article_repo: Arc<dyn ArticleReadRepository>,
    clock: Arc<dyn Clock>,
}

impl CommentQueryService {
    pub fn new(
        repo: Arc<dyn CommentRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            article_repo,
            clock,
        }
    }

    pub async fn list_comments(
        &self,
        query: ListCommentsQuery,
    ) -> ApplicationResult<Page<ModerationCommentDto>> {
        let filter = CommentFilter {
            approved: query.approved,
            created_between: query.created.map(|window| window.range(self.clock.now())),
        };

        let paginator = Paginator::new(ADMIN_PAGE_SIZE);
        let total = self.repo.count(&filter).await?;
        let window = paginator.window(total, query.page.as_deref());
        let records = self
            .repo
            .list_page(&filter, window.offset(), window.limit())
            .await?;

        let mut ids: Vec<ArticleId> = records.iter().map(|c| c.article_id).collect();
        ids.sort_unstable_by_key(|id| id.0);
        ids.dedup();
        let articles: HashMap<ArticleId, Article> = if ids.is_empty() {
            HashMap::new()
        } else {
            self.article_repo
                .find_by_ids(&ids)
                .await?
                .into_iter()
                .map(|article| (article.id, article))
                .collect()
        };

        let items = records
            .into_iter()
            .map(|comment| {
                let article = articles.get(&comment.article_id);
                ModerationCommentDto::from_parts(comment, article)
            })
            .collect();

        Ok(Page::new(items, window))
    }

    pub async fn get_comment(&self, id: i64) -> ApplicationResult<ModerationCommentDto> {
        let id =
            CommentId::new(id).map_err(|_| ApplicationError::not_found("comment not found"))?;
        let comment = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;
        let article = self.article_repo.find_by_id(comment.article_id).await?;
        Ok(ModerationCommentDto::from_parts(comment, article.as_ref()))
    }
}
