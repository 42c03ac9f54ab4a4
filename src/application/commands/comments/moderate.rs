// src/application/commands/comments/moderate.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::CommentId,
};

pub struct SetApprovalCommand {
    pub id: i64,
    pub approved: bool,
}

pub struct DeleteCommentCommand {
    pub id: i64,
}

impl CommentCommandService {
    pub async fn set_approval(&self, command: SetApprovalCommand) -> ApplicationResult<CommentDto> {
        let id = parse_id(command.id)?;
        let updated = self.repo.set_approved(id, command.approved).await?;
        tracing::info!(
            comment_id = command.id,
            approved = command.approved,
            "comment moderated"
        );
        Ok(updated.into())
    }

    pub async fn delete_comment(&self, command: DeleteCommentCommand) -> ApplicationResult<()> {
        let id = parse_id(command.id)?;
        self.repo.delete(id).await?;
        tracing::info!(comment_id = command.id, "comment deleted");
        Ok(())
    }
}

fn parse_id(id: i64) -> ApplicationResult<CommentId> {
    CommentId::new(id).map_err(|_| ApplicationError::not_found("comment not found"))
}
