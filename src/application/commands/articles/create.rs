// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleContent, ArticleImage, ArticleTitle, NewArticle},
};
use chrono::{DateTime, Utc};

pub struct CreateArticleCommand {
    pub title: String,
    pub slug: Option<String>,
    pub content: String,
    pub published_date: Option<DateTime<Utc>>,
    pub image: Option<String>,
    pub category_id: Option<i64>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let image = ArticleImage::parse(command.image)?;
        let category = self.resolve_category(command.category_id).await?;
        let slug = self.resolve_slug(command.slug, &title).await?;
        let published_date = command.published_date.unwrap_or_else(|| self.clock.now());

        let new_article = NewArticle {
            title,
            slug,
            content,
            published_date,
            image,
            category_id: category.as_ref().map(|c| c.id),
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(
            article_id = i64::from(created.id),
            slug = %created.slug,
            "article created"
        );
        Ok(ArticleDto::from_parts(created, category))
    }
}
