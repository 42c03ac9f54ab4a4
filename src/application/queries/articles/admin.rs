// src/application/queries/articles/admin.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ADMIN_PAGE_SIZE, ArticleDto, Page, Paginator},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct ListArticlesQuery {
    pub page: Option<String>,
}

pub struct GetArticleQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let paginator = Paginator::new(ADMIN_PAGE_SIZE);
        let total = self.read_repo.count().await?;
        let window = paginator.window(total, query.page.as_deref());

        let records = self
            .read_repo
            .list_page(window.offset(), window.limit())
            .await?;
        Ok(Page::new(self.to_dtos(records).await?, window))
    }

    pub async fn get_article(&self, query: GetArticleQuery) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        self.to_dto(article).await
    }
}
