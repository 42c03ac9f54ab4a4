// src/application/queries/articles/detail.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDetailView, CommentDto, CommentFormView},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleSlug},
};

pub struct GetArticleDetailQuery {
    pub slug: String,
}

impl ArticleQueryService {
    /// Resolve a public slug. Anything that is not a well-formed slug can
    /// never match and is reported as missing.
    pub async fn find_by_public_slug(&self, slug: &str) -> ApplicationResult<Article> {
        let slug =
            ArticleSlug::new(slug).map_err(|_| ApplicationError::not_found("article not found"))?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    pub async fn article_detail(
        &self,
        query: GetArticleDetailQuery,
    ) -> ApplicationResult<ArticleDetailView> {
        let article = self.find_by_public_slug(&query.slug).await?;
        self.detail_view(article, CommentFormView::empty()).await
    }

    /// Assemble the detail page for an already resolved article with the
    /// given comment form state.
    pub async fn detail_view(
        &self,
        article: Article,
        comment_form: CommentFormView,
    ) -> ApplicationResult<ArticleDetailView> {
        let comments = self
            .comment_repo
            .list_approved_for_article(article.id)
            .await?
            .into_iter()
            .filter(|comment| comment.is_visible())
            .map(CommentDto::from)
            .collect();

        Ok(ArticleDetailView {
            article: self.to_dto(article).await?,
            comments,
            comment_form,
        })
    }
}
