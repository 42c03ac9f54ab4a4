// src/application/commands/comments/submit.rs
use super::{CommentCommandService, CommentForm};
use crate::{
    application::{
        dto::{ArticleDetailView, CommentDto, articles::detail_path},
        error::ApplicationResult,
    },
    domain::comment::NewComment,
};

pub struct SubmitCommentCommand {
    pub slug: String,
    pub form: CommentForm,
}

#[derive(Debug)]
pub enum SubmitCommentOutcome {
    /// Stored; the client should be sent to `redirect_to`.
    Created {
        comment: CommentDto,
        redirect_to: String,
    },
    /// Nothing stored; the detail page re-rendered with the bound form.
    Invalid(Box<ArticleDetailView>),
}

impl CommentCommandService {
    /// Validate and store a visitor comment. A missing article is the only
    /// error; invalid input is reported through [`SubmitCommentOutcome::Invalid`].
    pub async fn submit_comment(
        &self,
        command: SubmitCommentCommand,
    ) -> ApplicationResult<SubmitCommentOutcome> {
        let article = self
            .article_queries
            .find_by_public_slug(&command.slug)
            .await?;

        let valid = match command.form.validate() {
            Ok(valid) => valid,
            Err(errors) => {
                tracing::debug!(slug = %article.slug, fields = ?errors.keys().collect::<Vec<_>>(), "comment rejected");
                let view = self
                    .article_queries
                    .detail_view(article, command.form.into_view(errors))
                    .await?;
                return Ok(SubmitCommentOutcome::Invalid(Box::new(view)));
            }
        };

        let redirect_to = detail_path(article.slug.as_str());
        let new_comment =
            NewComment::submitted(article.id, valid.author, valid.content, self.clock.now());
        let created = self.repo.insert(new_comment).await?;
        tracing::info!(
            comment_id = i64::from(created.id),
            article_id = i64::from(created.article_id),
            "comment submitted"
        );

        Ok(SubmitCommentOutcome::Created {
            comment: created.into(),
            redirect_to,
        })
    }
}
