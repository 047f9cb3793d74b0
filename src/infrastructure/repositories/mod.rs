// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_taxonomy;

pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_taxonomy::PostgresTaxonomyRepository;
