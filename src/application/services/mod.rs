// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{time::Clock, util::SlugGenerator},
        queries::articles::ArticleQueryService,
        taxonomy::TaxonomyService,
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        taxonomy::{TaxonomyRepository, TermKind},
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub tags: Arc<TaxonomyService>,
    pub topics: Arc<TaxonomyService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        tag_repo: Arc<dyn TaxonomyRepository>,
        topic_repo: Arc<dyn TaxonomyRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&article_write_repo),
        ));

        let tags = Arc::new(TaxonomyService::new(
            TermKind::Tag,
            tag_repo,
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));
        let topics = Arc::new(TaxonomyService::new(
            TermKind::Topic,
            topic_repo,
            slugger,
            clock,
        ));

        Self {
            article_commands,
            article_queries,
            tags,
            topics,
        }
    }

    pub fn taxonomy(&self, kind: TermKind) -> Arc<TaxonomyService> {
        match kind {
            TermKind::Tag => Arc::clone(&self.tags),
            TermKind::Topic => Arc::clone(&self.topics),
        }
    }
}
