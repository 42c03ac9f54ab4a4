// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleContent, ArticleId, ArticleImage, ArticleSlug, ArticleTitle},
};
use chrono::{DateTime, Utc};

/// Replaces title, content, image and category. Slug and published date are
/// kept when not supplied.
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub slug: Option<String>,
    pub content: String,
    pub published_date: Option<DateTime<Utc>>,
    pub image: Option<String>,
    pub category_id: Option<i64>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let image = ArticleImage::parse(command.image)?;
        let category = self.resolve_category(command.category_id).await?;

        let mut update = article
            .to_update()
            .with_title(title)
            .with_content(content)
            .with_image(image)
            .with_category(category.as_ref().map(|c| c.id));

        if let Some(slug) = command.slug.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) {
            update = update.with_slug(ArticleSlug::new(slug)?);
        }
        if let Some(published_date) = command.published_date {
            update = update.with_published_date(published_date);
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(article_id = i64::from(updated.id), "article updated");
        Ok(ArticleDto::from_parts(updated, category))
    }
}
