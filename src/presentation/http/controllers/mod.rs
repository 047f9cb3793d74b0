// src/presentation/http/controllers/mod.rs
pub mod archive;
pub mod article_requests;
pub mod editor;
pub mod taxonomy;
