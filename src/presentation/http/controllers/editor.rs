// src/presentation/http/controllers/editor.rs
use crate::application::{
    commands::articles::{
        ArticleTagCommand, DiscardCommand, DraftArticleCommand, PublishCommand,
        ReleasePatchCommand, ShareCommand,
    },
    dto::{ArticleDto, DraftCreatedDto, ShareLinkDto},
    queries::articles::GetArticleQuery,
};
use crate::domain::article::{ArticleView, DiscardTarget, PublishOutcome};
use crate::presentation::http::controllers::article_requests::{
    DiscardResponse, DraftRequest, EditorListParams, PublishResponse, ReviseRequest,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::{ArticleListResponse, StatusResponse};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};

#[utoipa::path(
    get,
    path = "/api/v1/me/articles",
    params(EditorListParams),
    responses(
        (status = 200, description = "Articles visible to the editor.", body = ArticleListResponse),
        (status = 400, description = "Invalid filter.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Editor"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<EditorListParams>,
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
    post,
    path = "/api/v1/me/drafts",
    request_body = DraftRequest,
    responses(
        (status = 201, description = "Draft stored.", body = DraftCreatedDto),
        (status = 400, description = "Validation failed.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Editor"
)]
pub async fn create_draft(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<DraftRequest>,
) -> HttpResult<(StatusCode, Json<DraftCreatedDto>)> {
    let command = DraftArticleCommand {
        title: payload.title,
        content: payload.content,
    };
    let id = state
        .services
        .article_commands
        .draft_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(DraftCreatedDto { id: id.into() })))
}

#[utoipa::path(
    get,
    path = "/api/v1/me/drafts/{id}",
    params(("id" = String, Path, description = "Article UUID")),
    responses(
        (status = 200, description = "Working copy: the draft, or the published article with its patch applied.", body = ArticleDto),
        (status = 400, description = "Malformed identifier.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Editor"
)]
pub async fn get_draft(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article(GetArticleQuery {
            id,
            view: ArticleView::Working,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/v1/me/drafts/{id}",
    params(("id" = String, Path, description = "Article UUID")),
    request_body = ReviseRequest,
    responses(
        (status = 200, description = "Revised working copy.", body = ArticleDto),
        (status = 400, description = "Validation failed.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Cover URL is not a valid absolute URL.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Editor"
)]
pub async fn revise_draft(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<ReviseRequest>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .revise(payload.into_command(id.clone()))
        .await
        .into_http()?;

    get_draft(Extension(state), Path(id)).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/me/drafts/{id}",
    params(("id" = String, Path, description = "Article UUID")),
    responses(
        (status = 200, description = "Draft deleted, or pending patch dropped.", body = DiscardResponse),
        (status = 404, description = "Nothing to discard.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Editor"
)]
pub async fn discard_draft(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<DiscardResponse>> {
    let target = state
        .services
        .article_commands
        .discard(DiscardCommand { id })
        .await
        .into_http()?;

    let discarded = match target {
        DiscardTarget::Draft => "draft",
        DiscardTarget::Patch => "patch",
    };
    Ok(Json(DiscardResponse {
        discarded: discarded.into(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/me/drafts/{id}/publish",
    params(("id" = String, Path, description = "Article UUID")),
    responses(
        (status = 200, description = "Published, or already published.", body = PublishResponse),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Editor"
)]
pub async fn publish_draft(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<PublishResponse>> {
    let outcome = state
        .services
        .article_commands
        .publish(PublishCommand { id })
        .await
        .into_http()?;

    let status = match outcome {
        PublishOutcome::Published => "published",
        PublishOutcome::AlreadyPublished => "already_published",
    };
    Ok(Json(PublishResponse {
        status: status.into(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/me/drafts/{id}/share",
    params(("id" = String, Path, description = "Article UUID")),
    responses(
        (status = 200, description = "Share token for the working copy.", body = ShareLinkDto),
        (status = 404, description = "Not found; `link` is `about:blank`.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Editor"
)]
pub async fn share_draft(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ShareLinkDto>> {
    let link = state
        .services
        .article_commands
        .share(ShareCommand { id })
        .await?;
    Ok(Json(ShareLinkDto { link }))
}

#[utoipa::path(
    post,
    path = "/api/v1/me/patches/{id}/release",
    params(("id" = String, Path, description = "Article UUID")),
    responses(
        (status = 200, description = "Patch merged into the published article.", body = StatusResponse),
        (status = 404, description = "No pending patch.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Article is still a draft.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Editor"
)]
pub async fn release_patch(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .article_commands
        .release(ReleasePatchCommand { id })
        .await
        .into_http()?;
    Ok(Json(StatusResponse {
        status: "released".into(),
    }))
}

#[utoipa::path(
    put,
    path = "/api/v1/me/articles/{id}/tags/{tag_id}",
    params(
        ("id" = String, Path, description = "Article UUID"),
        ("tag_id" = String, Path, description = "Tag slug")
    ),
    responses(
        (status = 200, description = "Tag attached.", body = StatusResponse),
        (status = 404, description = "Unknown article or tag.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Tag already attached.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Editor"
)]
pub async fn attach_tag(
    Extension(state): Extension<HttpState>,
    Path((id, tag_id)): Path<(String, String)>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .article_commands
        .add_tag(ArticleTagCommand {
            article_id: id,
            tag_id,
        })
        .await
        .into_http()?;
    Ok(Json(StatusResponse {
        status: "tag_attached".into(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/v1/me/articles/{id}/tags/{tag_id}",
    params(
        ("id" = String, Path, description = "Article UUID"),
        ("tag_id" = String, Path, description = "Tag slug")
    ),
    responses(
        (status = 200, description = "Tag detached.", body = StatusResponse),
        (status = 404, description = "Tag not attached.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Editor"
)]
pub async fn detach_tag(
    Extension(state): Extension<HttpState>,
    Path((id, tag_id)): Path<(String, String)>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .article_commands
        .remove_tag(ArticleTagCommand {
            article_id: id,
            tag_id,
        })
        .await
        .into_http()?;
    Ok(Json(StatusResponse {
        status: "tag_detached".into(),
    }))
}
