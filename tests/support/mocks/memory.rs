// tests/support/mocks/memory.rs
//! In-memory stand-in for the PostgreSQL repositories. It enforces the same
//! unique keys and foreign-key rules as the migrations: deleting a category
//! clears `category_id` on its articles, deleting an article removes its
//! comments.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Mutex;

use inkwell_blog::domain::article::{
    Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleSlug, ArticleTitle,
    ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use inkwell_blog::domain::category::{
    Category, CategoryId, CategoryName, CategoryRepository, CategorySlug, CategoryUpdate,
    NewCategory,
};
use inkwell_blog::domain::comment::{
    Comment, CommentAuthor, CommentContent, CommentFilter, CommentId, CommentRepository,
    NewComment,
};
use inkwell_blog::domain::errors::{DomainError, DomainResult};

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    articles: BTreeMap<i64, Article>,
    comments: BTreeMap<i64, Comment>,
    next_category_id: i64,
    next_article_id: i64,
    next_comment_id: i64,
}

impl Tables {
    fn category_clash(&self, name: &CategoryName, slug: &CategorySlug, skip: Option<i64>) -> Option<DomainError> {
        for (id, existing) in &self.categories {
            if Some(*id) == skip {
                continue;
            }
            if existing.name == *name {
                return Some(DomainError::Conflict("category name already exists".into()));
            }
            if existing.slug == *slug {
                return Some(DomainError::Conflict("category slug already exists".into()));
            }
        }
        None
    }

    fn article_clash(&self, slug: &ArticleSlug, skip: Option<i64>) -> Option<DomainError> {
        self.articles
            .iter()
            .any(|(id, existing)| Some(*id) != skip && existing.slug == *slug)
            .then(|| DomainError::Conflict("article slug already exists".into()))
    }

    fn check_category(&self, category_id: Option<CategoryId>) -> DomainResult<()> {
        match category_id {
            Some(id) if !self.categories.contains_key(&id.0) => {
                Err(DomainError::NotFound("category not found".into()))
            }
            _ => Ok(()),
        }
    }

    fn sorted_articles(&self) -> Vec<Article> {
        let mut articles: Vec<Article> = self.articles.values().cloned().collect();
        articles.sort_by(|a, b| {
            b.published_date
                .cmp(&a.published_date)
                .then_with(|| b.id.0.cmp(&a.id.0))
        });
        articles
    }
}

#[derive(Default)]
pub struct InMemoryBlog {
    tables: Mutex<Tables>,
}

impl InMemoryBlog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_category(&self, name: &str, slug: &str) -> Category {
        let mut tables = self.tables.lock().unwrap();
        tables.next_category_id += 1;
        let category = Category {
            id: CategoryId(tables.next_category_id),
            name: CategoryName::new(name).unwrap(),
            slug: CategorySlug::new(slug).unwrap(),
        };
        tables.categories.insert(category.id.0, category.clone());
        category
    }

    pub fn seed_article(
        &self,
        title: &str,
        slug: &str,
        published_date: DateTime<Utc>,
        category_id: Option<CategoryId>,
    ) -> Article {
        let mut tables = self.tables.lock().unwrap();
        tables.next_article_id += 1;
        let article = Article {
            id: ArticleId(tables.next_article_id),
            title: ArticleTitle::new(title).unwrap(),
            slug: ArticleSlug::new(slug).unwrap(),
            content: ArticleContent::new(format!("Body of {title}")).unwrap(),
            published_date,
            image: None,
            category_id,
        };
        tables.articles.insert(article.id.0, article.clone());
        article
    }

    pub fn seed_comment(
        &self,
        article_id: ArticleId,
        author: &str,
        content: &str,
        created_date: DateTime<Utc>,
        approved: bool,
    ) -> Comment {
        let mut tables = self.tables.lock().unwrap();
        tables.next_comment_id += 1;
        let comment = Comment {
            id: CommentId(tables.next_comment_id),
            article_id,
            author: CommentAuthor::new(author).unwrap(),
            content: CommentContent::new(content).unwrap(),
            created_date,
            approved,
        };
        tables.comments.insert(comment.id.0, comment.clone());
        comment
    }

    pub fn article(&self, id: ArticleId) -> Option<Article> {
        self.tables.lock().unwrap().articles.get(&id.0).cloned()
    }

    pub fn article_count(&self) -> usize {
        self.tables.lock().unwrap().articles.len()
    }

    /// Every stored comment of the article, approved or not, oldest first.
    pub fn comments_of(&self, article_id: ArticleId) -> Vec<Comment> {
        self.tables
            .lock()
            .unwrap()
            .comments
            .values()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect()
    }

    pub fn comment_count(&self) -> usize {
        self.tables.lock().unwrap().comments.len()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryBlog {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(err) = tables.category_clash(&category.name, &category.slug, None) {
            return Err(err);
        }
        tables.next_category_id += 1;
        let created = Category {
            id: CategoryId(tables.next_category_id),
            name: category.name,
            slug: category.slug,
        };
        tables.categories.insert(created.id.0, created.clone());
        Ok(created)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.categories.contains_key(&update.id.0) {
            return Err(DomainError::NotFound("category not found".into()));
        }
        if let Some(err) = tables.category_clash(&update.name, &update.slug, Some(update.id.0)) {
            return Err(err);
        }
        let updated = Category {
            id: update.id,
            name: update.name,
            slug: update.slug,
        };
        tables.categories.insert(updated.id.0, updated.clone());
        Ok(updated)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut tables = self.tables.lock().unwrap();
        if tables.categories.remove(&id.0).is_none() {
            return Err(DomainError::NotFound("category not found".into()));
        }
        for article in tables.articles.values_mut() {
            if article.category_id == Some(id) {
                article.category_id = None;
            }
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.tables.lock().unwrap().categories.get(&id.0).cloned())
    }

    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .categories
            .values()
            .find(|c| c.slug == *slug)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        let tables = self.tables.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| tables.categories.get(&id.0).cloned())
            .collect())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let mut categories: Vec<Category> =
            self.tables.lock().unwrap().categories.values().cloned().collect();
        categories.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(categories)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryBlog {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(err) = tables.article_clash(&article.slug, None) {
            return Err(err);
        }
        tables.check_category(article.category_id)?;
        tables.next_article_id += 1;
        let created = Article {
            id: ArticleId(tables.next_article_id),
            title: article.title,
            slug: article.slug,
            content: article.content,
            published_date: article.published_date,
            image: article.image,
            category_id: article.category_id,
        };
        tables.articles.insert(created.id.0, created.clone());
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.articles.contains_key(&update.id.0) {
            return Err(DomainError::NotFound("article not found".into()));
        }
        if let Some(err) = tables.article_clash(&update.slug, Some(update.id.0)) {
            return Err(err);
        }
        tables.check_category(update.category_id)?;
        let updated = Article {
            id: update.id,
            title: update.title,
            slug: update.slug,
            content: update.content,
            published_date: update.published_date,
            image: update.image,
            category_id: update.category_id,
        };
        tables.articles.insert(updated.id.0, updated.clone());
        Ok(updated)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut tables = self.tables.lock().unwrap();
        if tables.articles.remove(&id.0).is_none() {
            return Err(DomainError::NotFound("article not found".into()));
        }
        tables.comments.retain(|_, c| c.article_id != id);
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryBlog {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.article(id))
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .articles
            .values()
            .find(|a| a.slug == *slug)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[ArticleId]) -> DomainResult<Vec<Article>> {
        let tables = self.tables.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| tables.articles.get(&id.0).cloned())
            .collect())
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.article_count() as u64)
    }

    async fn list_page(&self, offset: u64, limit: u32) -> DomainResult<Vec<Article>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .sorted_articles()
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}

#[async_trait]
impl CommentRepository for InMemoryBlog {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.articles.contains_key(&comment.article_id.0) {
            return Err(DomainError::NotFound("article not found".into()));
        }
        tables.next_comment_id += 1;
        let created = Comment {
            id: CommentId(tables.next_comment_id),
            article_id: comment.article_id,
            author: comment.author,
            content: comment.content,
            created_date: comment.created_date,
            approved: comment.approved,
        };
        tables.comments.insert(created.id.0, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self.tables.lock().unwrap().comments.get(&id.0).cloned())
    }

    async fn set_approved(&self, id: CommentId, approved: bool) -> DomainResult<Comment> {
        let mut tables = self.tables.lock().unwrap();
        let comment = tables
            .comments
            .get_mut(&id.0)
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        comment.approved = approved;
        Ok(comment.clone())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        match self.tables.lock().unwrap().comments.remove(&id.0) {
            Some(_) => Ok(()),
            None => Err(DomainError::NotFound("comment not found".into())),
        }
    }

    async fn list_approved_for_article(
        &self,
        article_id: ArticleId,
    ) -> DomainResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .comments_of(article_id)
            .into_iter()
            .filter(|c| c.approved)
            .collect();
        comments.sort_by(|a, b| {
            a.created_date
                .cmp(&b.created_date)
                .then_with(|| a.id.0.cmp(&b.id.0))
        });
        Ok(comments)
    }

    async fn count(&self, filter: &CommentFilter) -> DomainResult<u64> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .comments
            .values()
            .filter(|c| filter.matches(c))
            .count() as u64)
    }

    async fn list_page(
        &self,
        filter: &CommentFilter,
        offset: u64,
        limit: u32,
    ) -> DomainResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .tables
            .lock()
            .unwrap()
            .comments
            .values()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect();
        comments.sort_by(|a, b| {
            b.created_date
                .cmp(&a.created_date)
                .then_with(|| b.id.0.cmp(&a.id.0))
        });
        Ok(comments
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}
