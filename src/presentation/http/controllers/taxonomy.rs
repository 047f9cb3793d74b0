// src/presentation/http/controllers/taxonomy.rs
use crate::application::dto::TermDto;
use crate::domain::taxonomy::TermKind;
use crate::presentation::http::controllers::article_requests::TermRequest;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};

async fn create_term(
    state: &HttpState,
    kind: TermKind,
    payload: TermRequest,
) -> HttpResult<(StatusCode, Json<TermDto>)> {
    let term = state
        .services
        .taxonomy(kind)
        .create(&payload.name)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(term)))
}

async fn rename_term(
    state: &HttpState,
    kind: TermKind,
    id: &str,
    payload: TermRequest,
) -> HttpResult<Json<TermDto>> {
    state
        .services
        .taxonomy(kind)
        .update(id, &payload.name)
        .await
        .into_http()
        .map(Json)
}

async fn delete_term(state: &HttpState, kind: TermKind, id: &str) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .taxonomy(kind)
        .remove(id)
        .await
        .into_http()?;
    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/me/tags",
    request_body = TermRequest,
    responses(
        (status = 201, description = "Tag created; its id is the slug of the name.", body = TermDto),
        (status = 400, description = "Invalid name.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "A tag with this id exists.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Taxonomy"
)]
pub async fn create_tag(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<TermRequest>,
) -> HttpResult<(StatusCode, Json<TermDto>)> {
    create_term(&state, TermKind::Tag, payload).await
}

#[utoipa::path(
    put,
    path = "/api/v1/me/tags/{id}",
    params(("id" = String, Path, description = "Tag slug")),
    request_body = TermRequest,
    responses(
        (status = 200, description = "Tag renamed; the id is unchanged.", body = TermDto),
        (status = 404, description = "Unknown tag.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Taxonomy"
)]
pub async fn rename_tag(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<TermRequest>,
) -> HttpResult<Json<TermDto>> {
    rename_term(&state, TermKind::Tag, &id, payload).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/me/tags/{id}",
    params(("id" = String, Path, description = "Tag slug")),
    responses(
        (status = 200, description = "Tag removed and detached from every article.", body = StatusResponse),
        (status = 404, description = "Unknown tag.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Taxonomy"
)]
pub async fn delete_tag(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<StatusResponse>> {
    delete_term(&state, TermKind::Tag, &id).await
}

#[utoipa::path(
    post,
    path = "/api/v1/me/topics",
    request_body = TermRequest,
    responses(
        (status = 201, description = "Topic created; its id is the slug of the name.", body = TermDto),
        (status = 400, description = "Invalid name.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "A topic with this id exists.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Taxonomy"
)]
pub async fn create_topic(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<TermRequest>,
) -> HttpResult<(StatusCode, Json<TermDto>)> {
    create_term(&state, TermKind::Topic, payload).await
}

#[utoipa::path(
    put,
    path = "/api/v1/me/topics/{id}",
    params(("id" = String, Path, description = "Topic slug")),
    request_body = TermRequest,
    responses(
        (status = 200, description = "Topic renamed; the id is unchanged.", body = TermDto),
        (status = 404, description = "Unknown topic.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Taxonomy"
)]
pub async fn rename_topic(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<TermRequest>,
) -> HttpResult<Json<TermDto>> {
    rename_term(&state, TermKind::Topic, &id, payload).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/me/topics/{id}",
    params(("id" = String, Path, description = "Topic slug")),
    responses(
        (status = 200, description = "Topic removed; articles keep no topic.", body = StatusResponse),
        (status = 404, description = "Unknown topic.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Taxonomy"
)]
pub async fn delete_topic(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<StatusResponse>> {
    delete_term(&state, TermKind::Topic, &id).await
}
