// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, ArticleRevision, ArticleSummary, NewDraft};
use crate::domain::article::lifecycle::{DiscardTarget, PublishOutcome};
use crate::domain::article::value_objects::{ArticleFilter, ArticleId, ArticleView};
use crate::domain::errors::DomainResult;
use crate::domain::taxonomy::TermId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// State transitions. Implementations decide the transition with
/// [`Lifecycle`](crate::domain::article::Lifecycle) while holding the article
/// row, so each call is all-or-nothing.
#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn draft(&self, draft: NewDraft) -> DomainResult<ArticleId>;
    async fn publish(&self, id: ArticleId, at: DateTime<Utc>) -> DomainResult<PublishOutcome>;
    /// Derived fields in `revision` were computed from a working copy read
    /// before this call, outside the row lock. Concurrent editors of one
    /// article can therefore store a slug or read-time derived from text the
    /// other editor has since replaced; the service assumes a single editor.
    async fn revise(&self, id: ArticleId, revision: ArticleRevision) -> DomainResult<()>;
    /// Issue (or return the already issued) preview link token.
    async fn share(&self, id: ArticleId) -> DomainResult<String>;
    async fn discard(&self, id: ArticleId) -> DomainResult<DiscardTarget>;
    async fn release(&self, id: ArticleId, at: DateTime<Utc>) -> DomainResult<()>;
    /// Fails with `Conflict` when the tag is already attached.
    async fn add_tag(&self, id: ArticleId, tag: &TermId) -> DomainResult<()>;
    async fn remove_tag(&self, id: ArticleId, tag: &TermId) -> DomainResult<()>;
    async fn record_view(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    /// `hidden` includes hidden articles; `drafts_only` restricts to drafts
    /// (otherwise only published articles are listed). Returns at most
    /// `per_page + 1` rows so callers can tell whether another page follows.
    async fn list(
        &self,
        filter: &ArticleFilter,
        hidden: bool,
        drafts_only: bool,
    ) -> DomainResult<Vec<ArticleSummary>>;
    async fn find_by_id(&self, id: ArticleId, view: ArticleView) -> DomainResult<Option<Article>>;
    /// Looks up the working copy behind a share link.
    async fn find_by_link(&self, link: &str) -> DomainResult<Option<Article>>;
}
