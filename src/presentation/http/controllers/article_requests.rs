// src/presentation/http/controllers/article_requests.rs
use crate::application::{
    commands::articles::ReviseArticleCommand, queries::articles::ListArticlesQuery,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public archive filter. Drafts and hidden articles are never listed.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams, ToSchema)]
pub struct ArchiveListParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
}

impl From<ArchiveListParams> for ListArticlesQuery {
    fn from(params: ArchiveListParams) -> Self {
        Self {
            search: params.search,
            topic: params.topic,
            tag: params.tag,
            month: params.month,
            year: params.year,
            page: params.page,
            per_page: params.per_page,
            hidden: false,
            drafts_only: false,
        }
    }
}

#[derive(Debug, Default, Deserialize, utoipa::IntoParams, ToSchema)]
pub struct EditorListParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    /// Include hidden articles.
    #[serde(default)]
    pub hidden: bool,
    /// List drafts instead of published articles.
    #[serde(default)]
    pub drafts_only: bool,
}

impl From<EditorListParams> for ListArticlesQuery {
    fn from(params: EditorListParams) -> Self {
        Self {
            search: params.search,
            topic: params.topic,
            tag: params.tag,
            month: params.month,
            year: params.year,
            page: params.page,
            per_page: params.per_page,
            hidden: params.hidden,
            drafts_only: params.drafts_only,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DraftRequest {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// Omitted or blank fields are left unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ReviseRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub cover_url: String,
    #[serde(default)]
    pub cover_caption: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub topic_id: String,
    #[serde(default)]
    pub pinned: Option<bool>,
    #[serde(default)]
    pub hidden: Option<bool>,
}

impl ReviseRequest {
    pub fn into_command(self, id: String) -> ReviseArticleCommand {
        ReviseArticleCommand {
            id,
            title: self.title,
            summary: self.summary,
            cover_url: self.cover_url,
            cover_caption: self.cover_caption,
            content: self.content,
            topic_id: self.topic_id,
            pinned: self.pinned,
            hidden: self.hidden,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TermRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PublishResponse {
    /// `published`, or `already_published` when nothing changed.
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DiscardResponse {
    /// `draft` when the draft was deleted, `patch` when a pending patch was dropped.
    pub discarded: String,
}
