// src/application/dto/views.rs
//! View contexts handed to the presentation layer, one per rendered page.
use super::{ArticleDto, CommentDto, Page};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name to human readable messages.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeView {
    pub articles: Page<ArticleDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentFormView {
    pub author: String,
    pub content: String,
    #[serde(default)]
    pub errors: FieldErrors,
}

impl CommentFormView {
    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDetailView {
    pub article: ArticleDto,
    pub comments: Vec<CommentDto>,
    pub comment_form: CommentFormView,
}
