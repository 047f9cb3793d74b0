// src/domain/article/value_objects.rs
use crate::domain::errors::{DomainResult, FieldViolation};
use crate::domain::identifier::parse_uuid;
use crate::domain::taxonomy::TermId;
use crate::domain::text::{
    collapse_whitespace, ensure_max_bytes, ensure_max_chars, ensure_min_chars, ensure_required,
};
use chrono::{DateTime, TimeZone, Utc};
use std::fmt;
use uuid::Uuid;

pub const TITLE_MAX_CHARS: usize = 256;
pub const CONTENT_MAX_BYTES: usize = 3 * 1024 * 1024;
pub const SUMMARY_MIN_CHARS: usize = 100;
pub const SUMMARY_MAX_CHARS: usize = 512;
pub const CAPTION_MAX_CHARS: usize = 256;

/// Slug used when a title has no word characters at all.
pub const FALLBACK_SLUG: &str = "untitled";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(Uuid);

impl ArticleId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Accepts any UUID spelling the identifier normalizer understands.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        parse_uuid(raw).map(Self)
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<ArticleId> for Uuid {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    /// Trims, collapses inner whitespace runs, then checks presence and length.
    pub fn new(value: &str) -> DomainResult<Self> {
        let value = collapse_whitespace(value);
        ensure_required("title", &value)?;
        ensure_max_chars("title", &value, TITLE_MAX_CHARS)?;
        Ok(Self(value))
    }

    /// `None` when the input is blank, which revision payloads read as "unchanged".
    pub fn optional(value: &str) -> DomainResult<Option<Self>> {
        if value.trim().is_empty() {
            return Ok(None);
        }
        Self::new(value).map(Some)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(FieldViolation::new("slug", "required").into());
        }
        Ok(Self(value))
    }

    /// Wrap a generated slug, substituting [`FALLBACK_SLUG`] when nothing survived.
    pub fn from_generated(value: String) -> Self {
        if value.is_empty() {
            Self(FALLBACK_SLUG.to_owned())
        } else {
            Self(value)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleContent(String);

impl ArticleContent {
    pub fn new(value: &str) -> DomainResult<Self> {
        let value = value.trim();
        ensure_max_bytes("content", value, CONTENT_MAX_BYTES)?;
        Ok(Self(value.to_owned()))
    }

    pub fn optional(value: &str) -> DomainResult<Option<Self>> {
        let content = Self::new(value)?;
        Ok((!content.0.is_empty()).then_some(content))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSummaryText(String);

impl ArticleSummaryText {
    pub fn optional(value: &str) -> DomainResult<Option<Self>> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        ensure_min_chars("summary", value, SUMMARY_MIN_CHARS)?;
        ensure_max_chars("summary", value, SUMMARY_MAX_CHARS)?;
        Ok(Some(Self(value.to_owned())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverCaption(String);

impl CoverCaption {
    pub fn optional(value: &str) -> DomainResult<Option<Self>> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        ensure_max_chars("cover_caption", value, CAPTION_MAX_CHARS)?;
        Ok(Some(Self(value.to_owned())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// A calendar month of publication, used to narrow listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicationWindow {
    pub month: u32,
    pub year: i32,
}

impl PublicationWindow {
    pub fn new(month: Option<u32>, year: Option<i32>) -> DomainResult<Option<Self>> {
        match (month, year) {
            (None, None) => Ok(None),
            (Some(_), None) => Err(FieldViolation::new("year", "required_with")
                .with_param("month")
                .into()),
            (None, Some(_)) => Err(FieldViolation::new("month", "required_with")
                .with_param("year")
                .into()),
            (Some(month), Some(year)) => {
                if !(1..=12).contains(&month) {
                    return Err(FieldViolation::new("month", "range").with_param("1-12").into());
                }
                if !(1970..=9999).contains(&year) {
                    return Err(FieldViolation::new("year", "range")
                        .with_param("1970-9999")
                        .into());
                }
                Ok(Some(Self { month, year }))
            }
        }
    }

    /// Half-open `[start, end)` range covering the month.
    pub fn bounds(&self) -> DomainResult<(DateTime<Utc>, DateTime<Utc>)> {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        let start = Utc
            .with_ymd_and_hms(self.year, self.month, 1, 0, 0, 0)
            .single();
        let end = Utc
            .with_ymd_and_hms(next_year, next_month, 1, 0, 0, 0)
            .single();
        start
            .zip(end)
            .ok_or_else(|| FieldViolation::new("month", "range").with_param("1-12").into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Pagination {
    pub const DEFAULT_PER_PAGE: u32 = 20;
    pub const MAX_PER_PAGE: u32 = 100;

    pub fn new(page: u32, per_page: u32) -> Self {
        let per_page = if per_page == 0 {
            Self::DEFAULT_PER_PAGE
        } else {
            per_page.min(Self::MAX_PER_PAGE)
        };
        Self {
            page: page.max(1),
            per_page,
        }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_PER_PAGE)
    }
}

/// Listing criteria. `search` has already been normalized when it reaches a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub search: Option<String>,
    pub topic: Option<TermId>,
    pub tag: Option<TermId>,
    pub window: Option<PublicationWindow>,
    pub pagination: Pagination,
}

/// Which copy of an article a lookup wants: the public one, or the editor's
/// working copy (the draft itself, or a published article with its patch applied).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleView {
    Published,
    Working,
}
