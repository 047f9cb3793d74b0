// src/presentation/http/controllers/archive.rs
use crate::application::{
    dto::{ArticleDto, TermDto},
    queries::articles::GetArticleByLinkQuery,
};
use crate::presentation::http::controllers::article_requests::ArchiveListParams;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::ArticleListResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};

#[utoipa::path(
    get,
    path = "/api/v1/archive/articles",
    params(ArchiveListParams),
    responses(
        (status = 200, description = "Published, visible articles; pinned first.", body = ArticleListResponse),
        (status = 400, description = "Invalid filter.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Archive"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArchiveListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    let page = state
        .services
        .article_queries
        .list_articles(params.into())
        .await
        .into_http()?;
    Ok(Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/archive/articles/{id}",
    params(("id" = String, Path, description = "Article UUID in any common spelling")),
    responses(
        (status = 200, description = "Published article. Counts as a view unless hidden.", body = ArticleDto),
        (status = 400, description = "Malformed identifier.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No published article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Archive"
)]
pub async fn read_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .read_article(&id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/archive/shared/{link}",
    params(("link" = String, Path, description = "Share token issued for a draft or patched article")),
    responses(
        (status = 200, description = "Working copy behind the share link.", body = ArticleDto),
        (status = 404, description = "Unknown link.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Archive"
)]
pub async fn read_shared(
    Extension(state): Extension<HttpState>,
    Path(link): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_link(GetArticleByLinkQuery { link })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/archive/tags",
    responses((status = 200, description = "All tags.", body = [TermDto])),
    tag = "Archive"
)]
pub async fn list_tags(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<TermDto>>> {
    state.services.tags.list().await.into_http().map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/archive/tags/{id}",
    params(("id" = String, Path, description = "Tag slug")),
    responses(
        (status = 200, description = "Tag.", body = TermDto),
        (status = 404, description = "Unknown tag.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Archive"
)]
pub async fn get_tag(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<TermDto>> {
    state.services.tags.get(&id).await.into_http().map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/archive/topics",
    responses((status = 200, description = "All topics.", body = [TermDto])),
    tag = "Archive"
)]
pub async fn list_topics(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<TermDto>>> {
    state.services.topics.list().await.into_http().map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/archive/topics/{id}",
    params(("id" = String, Path, description = "Topic slug")),
    responses(
        (status = 200, description = "Topic.", body = TermDto),
        (status = 404, description = "Unknown topic.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Archive"
)]
pub async fn get_topic(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<TermDto>> {
    state.services.topics.get(&id).await.into_http().map(Json)
}
