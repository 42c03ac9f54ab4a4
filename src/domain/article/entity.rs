// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleImage, ArticleSlug, ArticleTitle,
};
use crate::domain::category::CategoryId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub published_date: DateTime<Utc>,
    pub image: Option<ArticleImage>,
    pub category_id: Option<CategoryId>,
}

impl Article {
    /// Build a full-replacement update seeded with the current state.
    pub fn to_update(&self) -> ArticleUpdate {
        ArticleUpdate {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            content: self.content.clone(),
            published_date: self.published_date,
            image: self.image.clone(),
            category_id: self.category_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub published_date: DateTime<Utc>,
    pub image: Option<ArticleImage>,
    pub category_id: Option<CategoryId>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub published_date: DateTime<Utc>,
    pub image: Option<ArticleImage>,
    pub category_id: Option<CategoryId>,
}

impl ArticleUpdate {
    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = title;
        self
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = slug;
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = content;
        self
    }

    pub fn with_published_date(mut self, published_date: DateTime<Utc>) -> Self {
        self.published_date = published_date;
        self
    }

    pub fn with_image(mut self, image: Option<ArticleImage>) -> Self {
        self.image = image;
        self
    }

    pub fn with_category(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = category_id;
        self
    }
}
