// src/application/queries/mod.rs
pub mod articles;
pub mod categories;
pub mod comments;
