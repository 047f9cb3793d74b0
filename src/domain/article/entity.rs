// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleSlug, ArticleSummaryText, ArticleTitle, CoverCaption,
};
use crate::domain::errors::{DomainResult, FieldViolation};
use crate::domain::taxonomy::{Term, TermId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleStatus {
    Draft,
    Published,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cover {
    pub url: String,
    pub caption: String,
}

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub summary: String,
    pub cover: Cover,
    pub read_time: u32,
    pub views: i64,
    pub status: ArticleStatus,
    pub pinned: bool,
    pub hidden: bool,
    /// True when an open patch exists, whether or not it has been applied to this copy.
    pub has_patch: bool,
    pub topic: Option<Term>,
    pub tags: Vec<Term>,
    pub drafted_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_draft(&self) -> bool {
        self.status == ArticleStatus::Draft
    }

    /// A pinned article must be published and visible.
    pub fn ensure_pin_allowed(&self, pinned: Option<bool>, hidden: Option<bool>) -> DomainResult<()> {
        let pinned = pinned.unwrap_or(self.pinned);
        if !pinned {
            return Ok(());
        }
        if hidden.unwrap_or(self.hidden) {
            return Err(FieldViolation::new("pinned", "excluded_with")
                .with_param("hidden")
                .into());
        }
        if self.is_draft() {
            return Err(FieldViolation::new("pinned", "excluded_with")
                .with_param("draft")
                .into());
        }
        Ok(())
    }
}

/// Listing projection of an article.
#[derive(Debug, Clone)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub cover: Cover,
    pub read_time: u32,
    pub views: i64,
    pub status: ArticleStatus,
    pub pinned: bool,
    pub hidden: bool,
    pub topic: Option<TermId>,
    pub drafted_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewDraft {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub read_time: u32,
    pub drafted_at: DateTime<Utc>,
}

/// A validated partial update. `None` leaves the stored value alone.
#[derive(Debug, Clone)]
pub struct ArticleRevision {
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub content: Option<ArticleContent>,
    pub read_time: Option<u32>,
    pub summary: Option<ArticleSummaryText>,
    pub cover_url: Option<String>,
    pub cover_caption: Option<CoverCaption>,
    pub topic: Option<TermId>,
    pub pinned: Option<bool>,
    pub hidden: Option<bool>,
    pub revised_at: DateTime<Utc>,
}

impl ArticleRevision {
    pub fn new(revised_at: DateTime<Utc>) -> Self {
        Self {
            title: None,
            slug: None,
            content: None,
            read_time: None,
            summary: None,
            cover_url: None,
            cover_caption: None,
            topic: None,
            pinned: None,
            hidden: None,
            revised_at,
        }
    }

    pub fn touches_patchable(&self) -> bool {
        self.title.is_some()
            || self.slug.is_some()
            || self.content.is_some()
            || self.read_time.is_some()
            || self.topic.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.touches_patchable()
            && self.summary.is_none()
            && self.cover_url.is_none()
            && self.cover_caption.is_none()
            && self.pinned.is_none()
            && self.hidden.is_none()
    }
}
