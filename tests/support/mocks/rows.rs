// tests/support/mocks/rows.rs
//! Row-level writes the Postgres store performs in SQL, replayed on plain values.
use chrono::{DateTime, Utc};
use folio_core::domain::article::{
    Article, ArticleRevision, ArticleStatus, ArticleSummary, PublicationWindow,
};
use folio_core::domain::taxonomy::{Term, TermId};

/// Mirror of an `article_patches` row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub read_time: Option<u32>,
    pub topic: Option<TermId>,
}

impl PendingPatch {
    /// Same effect as the `ON CONFLICT ... COALESCE` upsert.
    pub fn merge(&mut self, revision: &ArticleRevision) {
        if let Some(title) = &revision.title {
            self.title = Some(title.as_str().to_owned());
        }
        if let Some(slug) = &revision.slug {
            self.slug = Some(slug.as_str().to_owned());
        }
        if let Some(content) = &revision.content {
            self.content = Some(content.as_str().to_owned());
        }
        if revision.read_time.is_some() {
            self.read_time = revision.read_time;
        }
        if revision.topic.is_some() {
            self.topic.clone_from(&revision.topic);
        }
    }
}

pub trait StoredArticle {
    fn publish(&mut self, at: DateTime<Utc>);
    fn overlay(&mut self, patch: &PendingPatch, topic: Option<Term>);
    fn release(&mut self, patch: &PendingPatch, topic: Option<Term>, at: DateTime<Utc>);
    fn apply_presentation(&mut self, revision: &ArticleRevision);
    fn apply_draft_content(&mut self, revision: &ArticleRevision, topic: Option<Term>);
    fn to_summary(&self) -> ArticleSummary;
}

impl StoredArticle for Article {
    fn publish(&mut self, at: DateTime<Utc>) {
        self.status = ArticleStatus::Published;
        self.published_at = Some(at);
        self.updated_at = at;
    }

    fn overlay(&mut self, patch: &PendingPatch, topic: Option<Term>) {
        if let Some(title) = &patch.title {
            self.title.clone_from(title);
        }
        if let Some(slug) = &patch.slug {
            self.slug.clone_from(slug);
        }
        if let Some(content) = &patch.content {
            self.content.clone_from(content);
        }
        if let Some(read_time) = patch.read_time {
            self.read_time = read_time;
        }
        if patch.topic.is_some() {
            self.topic = topic;
        }
    }

    fn release(&mut self, patch: &PendingPatch, topic: Option<Term>, at: DateTime<Utc>) {
        self.overlay(patch, topic);
        self.has_patch = false;
        self.modified_at = Some(at);
        self.updated_at = at;
    }

    fn apply_presentation(&mut self, revision: &ArticleRevision) {
        if let Some(summary) = &revision.summary {
            self.summary = summary.as_str().to_owned();
        }
        if let Some(url) = &revision.cover_url {
            self.cover.url.clone_from(url);
        }
        if let Some(caption) = &revision.cover_caption {
            self.cover.caption = caption.as_str().to_owned();
        }
        if let Some(pinned) = revision.pinned {
            self.pinned = pinned;
        }
        if let Some(hidden) = revision.hidden {
            self.hidden = hidden;
        }
        self.updated_at = revision.revised_at;
    }

    fn apply_draft_content(&mut self, revision: &ArticleRevision, topic: Option<Term>) {
        if let Some(title) = &revision.title {
            self.title = title.as_str().to_owned();
        }
        if let Some(slug) = &revision.slug {
            self.slug = slug.as_str().to_owned();
        }
        if let Some(content) = &revision.content {
            self.content = content.as_str().to_owned();
        }
        if let Some(read_time) = revision.read_time {
            self.read_time = read_time;
        }
        if revision.topic.is_some() {
            self.topic = topic;
        }
    }

    fn to_summary(&self) -> ArticleSummary {
        ArticleSummary {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            summary: self.summary.clone(),
            cover: self.cover.clone(),
            read_time: self.read_time,
            views: self.views,
            status: self.status,
            pinned: self.pinned,
            hidden: self.hidden,
            topic: self.topic.as_ref().map(|topic| topic.id.clone()),
            drafted_at: self.drafted_at,
            published_at: self.published_at,
        }
    }
}

/// `[start, end)` check matching the SQL window predicate.
pub fn window_contains(window: &PublicationWindow, at: DateTime<Utc>) -> bool {
    window
        .bounds()
        .map(|(start, end)| start <= at && at < end)
        .unwrap_or(false)
}
