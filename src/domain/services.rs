// src/domain/services.rs
use std::sync::Arc;

use crate::domain::article::value_objects::ARTICLE_SLUG_MAX_LEN;
use crate::domain::article::{ArticleReadRepository, ArticleSlug, ArticleTitle};
use crate::domain::category::value_objects::CATEGORY_SLUG_MAX_LEN;
use crate::domain::category::{CategoryName, CategoryRepository, CategorySlug};
use crate::domain::errors::DomainResult;

pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Derives unique slugs for articles and categories from their title or
/// name. Collisions get a `-N` suffix, starting at `-1`.
pub struct SlugService {
    articles: Arc<dyn ArticleReadRepository>,
    categories: Arc<dyn CategoryRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl SlugService {
    pub fn new(
        articles: Arc<dyn ArticleReadRepository>,
        categories: Arc<dyn CategoryRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            articles,
            categories,
            generator,
        }
    }

    pub async fn unique_article_slug(
        &self,
        title: &ArticleTitle,
    ) -> DomainResult<ArticleSlug> {
        let base = self.base_slug(title.as_str(), "article", ARTICLE_SLUG_MAX_LEN);
        let mut counter = 0u64;

        loop {
            let slug = ArticleSlug::new(candidate(&base, counter, ARTICLE_SLUG_MAX_LEN))?;
            match self.articles.find_by_slug(&slug).await? {
                Some(_) => counter += 1,
                None => return Ok(slug),
            }
        }
    }

    pub async fn unique_category_slug(
        &self,
        name: &CategoryName,
    ) -> DomainResult<CategorySlug> {
        let base = self.base_slug(name.as_str(), "category", CATEGORY_SLUG_MAX_LEN);
        let mut counter = 0u64;

        loop {
            let slug = CategorySlug::new(candidate(&base, counter, CATEGORY_SLUG_MAX_LEN))?;
            match self.categories.find_by_slug(&slug).await? {
                Some(_) => counter += 1,
                None => return Ok(slug),
            }
        }
    }

    fn base_slug(&self, input: &str, fallback: &str, max_len: usize) -> String {
        let base = self.generator.slugify(input);
        let base: String = base
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
            .collect();
        let base = truncate(&base, max_len);
        if base.is_empty() {
            fallback.to_string()
        } else {
            base
        }
    }
}

fn candidate(base: &str, counter: u64, max_len: usize) -> String {
    if counter == 0 {
        return base.to_string();
    }
    let suffix = format!("-{counter}");
    let room = max_len.saturating_sub(suffix.len());
    format!("{}{}", truncate(base, room), suffix)
}

fn truncate(value: &str, max_len: usize) -> String {
    // the filter above leaves ASCII only, so byte and char lengths agree
    let cut = &value[..value.len().min(max_len)];
    cut.trim_end_matches('-').to_string()
}
