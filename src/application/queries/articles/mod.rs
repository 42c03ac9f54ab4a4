// src/application/queries/articles/mod.rs
mod admin;
mod detail;
mod home;
mod service;

pub use admin::{GetArticleQuery, ListArticlesQuery};
pub use detail::GetArticleDetailQuery;
pub use home::HomePageQuery;
pub use service::ArticleQueryService;
