// src/presentation/http/controllers/mod.rs
pub mod admin_articles;
pub mod admin_categories;
pub mod admin_comments;
pub mod blog;
