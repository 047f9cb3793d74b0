// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{time::Clock, util::SlugGenerator},
    domain::article::{
        ArticleReadRepository, ArticleSlug, ArticleWriteRepository, metrics::estimate_read_minutes,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slugger,
            clock,
        }
    }

    pub(super) fn derive_slug(&self, title: &str) -> ArticleSlug {
        ArticleSlug::from_generated(self.slugger.slugify(title))
    }
}

/// Read-time of an article is measured over its title followed by its body.
pub(super) fn read_minutes(title: &str, content: &str) -> u32 {
    if content.is_empty() {
        return estimate_read_minutes(title);
    }
    estimate_read_minutes(&format!("{title} {content}"))
}
