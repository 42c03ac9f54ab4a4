// src/application/dto/articles.rs
use crate::domain::{article::Article, category::Category};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CategoryDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(with = "serde_time")]
    pub published_date: DateTime<Utc>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryDto>,
    /// Path of the public detail page.
    pub url: String,
}

impl ArticleDto {
    /// `category` must be the article's own category, already resolved.
    pub fn from_parts(article: Article, category: Option<Category>) -> Self {
        let url = detail_path(article.slug.as_str());
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            content: article.content.into_inner(),
            published_date: article.published_date,
            image: article.image.map(|image| image.into_inner()),
            category: category.map(CategoryDto::from),
            url,
        }
    }
}

/// Canonical detail path for an article slug.
pub fn detail_path(slug: &str) -> String {
    format!("/article/{slug}/")
}
