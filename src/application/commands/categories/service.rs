// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::{
            CategoryId, CategoryName, CategoryRepository, CategorySlug, CategoryUpdate,
            NewCategory,
        },
        services::SlugService,
    },
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub slug: Option<String>,
}

/// Slug is kept when not supplied.
pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: String,
    pub slug: Option<String>,
}

pub struct DeleteCategoryCommand {
    pub id: i64,
}

pub struct CategoryCommandService {
    repo: Arc<dyn CategoryRepository>,
    slug_service: Arc<SlugService>,
}

impl CategoryCommandService {
    pub fn new(repo: Arc<dyn CategoryRepository>, slug_service: Arc<SlugService>) -> Self {
        Self { repo, slug_service }
    }

    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        let slug = match non_blank(command.slug) {
            Some(slug) => CategorySlug::new(slug)?,
            None => self.slug_service.unique_category_slug(&name).await?,
        };

        let created = self.repo.insert(NewCategory { name, slug }).await?;
        tracing::info!(
            category_id = i64::from(created.id),
            slug = %created.slug,
            "category created"
        );
        Ok(created.into())
    }

    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = parse_id(command.id)?;
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let name = CategoryName::new(command.name)?;
        let slug = match non_blank(command.slug) {
            Some(slug) => CategorySlug::new(slug)?,
            None => existing.slug,
        };

        let updated = self.repo.update(CategoryUpdate { id, name, slug }).await?;
        tracing::info!(category_id = command.id, "category updated");
        Ok(updated.into())
    }

    /// Articles in the category stay and lose their category.
    pub async fn delete_category(&self, command: DeleteCategoryCommand) -> ApplicationResult<()> {
        let id = parse_id(command.id)?;
        self.repo.delete(id).await?;
        tracing::info!(category_id = command.id, "category deleted");
        Ok(())
    }
}

fn parse_id(id: i64) -> ApplicationResult<CategoryId> {
    CategoryId::new(id).map_err(|_| ApplicationError::not_found("category not found"))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
