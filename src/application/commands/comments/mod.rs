// src/application/commands/comments/mod.rs
mod form;
mod moderate;
mod service;
mod submit;

pub use form::{CommentForm, ValidComment};
pub use moderate::{DeleteCommentCommand, SetApprovalCommand};
pub use service::CommentCommandService;
pub use submit::{SubmitCommentCommand, SubmitCommentOutcome};
