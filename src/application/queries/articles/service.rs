// src/application/queries/articles/service.rs
use std::{collections::HashMap, sync::Arc};

use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::{Article, ArticleReadRepository},
        category::{Category, CategoryId, CategoryRepository},
        comment::CommentRepository,
    },
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        comment_repo: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            read_repo,
            category_repo,
            comment_repo,
        }
    }

    /// Convert articles to DTOs, resolving every referenced category with a
    /// single lookup.
    pub(super) async fn to_dtos(
        &self,
        articles: Vec<Article>,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let mut ids: Vec<CategoryId> = articles.iter().filter_map(|a| a.category_id).collect();
        ids.sort_unstable();
        ids.dedup();

        let categories: HashMap<CategoryId, Category> = if ids.is_empty() {
            HashMap::new()
        } else {
            self.category_repo
                .find_by_ids(&ids)
                .await?
                .into_iter()
                .map(|category| (category.id, category))
                .collect()
        };

        Ok(articles
            .into_iter()
            .map(|article| {
                let category = article
                    .category_id
                    .and_then(|id| categories.get(&id).cloned());
                ArticleDto::from_parts(article, category)
            })
            .collect())
    }

    pub(super) async fn to_dto(&self, article: Article) -> ApplicationResult<ArticleDto> {
        let category = match article.category_id {
            Some(id) => self.category_repo.find_by_id(id).await?,
            None => None,
        };
        Ok(ArticleDto::from_parts(article, category))
    }
}
