// src/application/queries/categories/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryId, CategoryRepository},
};

pub struct CategoryQueryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryQueryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let records = self.repo.list().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn get_category(&self, id: i64) -> ApplicationResult<CategoryDto> {
        let id =
            CategoryId::new(id).map_err(|_| ApplicationError::not_found("category not found"))?;
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("category not found"))
    }
}
