// src/application/dto/mod.rs
pub mod articles;
pub mod categories;
pub mod comments;
pub mod pagination;
pub mod serde_time;
pub mod views;

pub use articles::ArticleDto;
pub use categories::CategoryDto;
pub use comments::{CommentArticleRef, CommentDto, ModerationCommentDto};
pub use pagination::{ADMIN_PAGE_SIZE, HOME_PAGE_SIZE, Page, PageWindow, Paginator};
pub use views::{ArticleDetailView, CommentFormView, FieldErrors, HomeView};
