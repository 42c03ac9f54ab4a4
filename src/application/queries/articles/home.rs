// src/application/queries/articles/home.rs
use super::ArticleQueryService;
use crate::application::{
    dto::{HOME_PAGE_SIZE, HomeView, Page, Paginator},
    error::ApplicationResult,
};

pub struct HomePageQuery {
    /// Raw `page` query parameter, unvalidated.
    pub page: Option<String>,
}

impl ArticleQueryService {
    pub async fn home_page(&self, query: HomePageQuery) -> ApplicationResult<HomeView> {
        let paginator = Paginator::new(HOME_PAGE_SIZE);
        let total = self.read_repo.count().await?;
        let window = paginator.window(total, query.page.as_deref());

        let records = self
            .read_repo
            .list_page(window.offset(), window.limit())
            .await?;
        let items = self.to_dtos(records).await?;

        Ok(HomeView {
            articles: Page::new(items, window),
        })
    }
}
