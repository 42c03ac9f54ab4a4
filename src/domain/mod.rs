// src/domain/mod.rs
pub mod article;
pub mod category;
pub mod comment;
pub mod errors;
pub mod services;
pub mod slug;
