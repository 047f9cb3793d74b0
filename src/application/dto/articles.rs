use crate::application::dto::TermDto;
use crate::domain::article::{Article, ArticleStatus, ArticleSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub summary: String,
    pub cover_url: String,
    pub cover_caption: String,
    pub read_time: u32,
    pub views: i64,
    pub is_draft: bool,
    pub is_pinned: bool,
    pub is_hidden: bool,
    pub has_patch: bool,
    #[serde(default)]
    pub topic: Option<TermDto>,
    #[serde(default)]
    pub tags: Vec<TermDto>,
    pub drafted_at: DateTime<Utc>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title,
            slug: article.slug,
            content: article.content,
            summary: article.summary,
            cover_url: article.cover.url,
            cover_caption: article.cover.caption,
            read_time: article.read_time,
            views: article.views,
            is_draft: article.status == ArticleStatus::Draft,
            is_pinned: article.pinned,
            is_hidden: article.hidden,
            has_patch: article.has_patch,
            topic: article.topic.map(Into::into),
            tags: article.tags.into_iter().map(Into::into).collect(),
            drafted_at: article.drafted_at,
            published_at: article.published_at,
            modified_at: article.modified_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub cover_url: String,
    pub cover_caption: String,
    pub read_time: u32,
    pub views: i64,
    pub is_draft: bool,
    pub is_pinned: bool,
    pub is_hidden: bool,
    #[serde(default)]
    pub topic_id: Option<String>,
    pub drafted_at: DateTime<Utc>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl From<ArticleSummary> for ArticleSummaryDto {
    fn from(summary: ArticleSummary) -> Self {
        Self {
            id: summary.id.into(),
            title: summary.title,
            slug: summary.slug,
            summary: summary.summary,
            cover_url: summary.cover.url,
            cover_caption: summary.cover.caption,
            read_time: summary.read_time,
            views: summary.views,
            is_draft: summary.status == ArticleStatus::Draft,
            is_pinned: summary.pinned,
            is_hidden: summary.hidden,
            topic_id: summary.topic.map(|topic| topic.into_inner()),
            drafted_at: summary.drafted_at,
            published_at: summary.published_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DraftCreatedDto {
    pub id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShareLinkDto {
    pub link: String,
}
