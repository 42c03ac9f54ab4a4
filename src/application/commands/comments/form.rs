// src/application/commands/comments/form.rs
use crate::{
    application::dto::{CommentFormView, FieldErrors},
    domain::comment::{
        CommentAuthor, CommentContent, value_objects::COMMENT_AUTHOR_MAX_LEN,
    },
};

const REQUIRED: &str = "This field is required.";

/// Visitor-submitted comment fields. Absent fields stay empty so they surface
/// as field errors rather than request rejections.
#[derive(Debug, Clone, Default)]
pub struct CommentForm {
    pub author: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct ValidComment {
    pub author: CommentAuthor,
    pub content: CommentContent,
}

impl CommentForm {
    /// Builds the form from raw urlencoded pairs. A repeated field keeps its
    /// last value; unknown fields are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "author" => form.author = value,
                "content" => form.content = value,
                _ => {}
            }
        }
        form
    }

    pub fn validate(&self) -> Result<ValidComment, FieldErrors> {
        let mut errors = FieldErrors::new();

        let author = CommentAuthor::new(self.author.as_str())
            .map_err(|_| push(&mut errors, "author", author_error(&self.author)))
            .ok();
        let content = CommentContent::new(self.content.as_str())
            .map_err(|_| push(&mut errors, "content", REQUIRED.to_string()))
            .ok();

        match (author, content) {
            (Some(author), Some(content)) => Ok(ValidComment { author, content }),
            _ => Err(errors),
        }
    }

    /// Bound form state for re-rendering, echoing what the visitor typed.
    pub fn into_view(self, errors: FieldErrors) -> CommentFormView {
        CommentFormView {
            author: self.author,
            content: self.content,
            errors,
        }
    }
}

fn author_error(raw: &str) -> String {
    let len = raw.trim().chars().count();
    if len == 0 {
        REQUIRED.to_string()
    } else {
        format!("Ensure this value has at most {COMMENT_AUTHOR_MAX_LEN} characters (it has {len}).")
    }
}

fn push(errors: &mut FieldErrors, field: &str, message: String) {
    errors.entry(field.to_string()).or_default().push(message);
}
