// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleSummaryDto, Page};
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use axum::{
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub items: Vec<ArticleSummaryDto>,
    pub page: u32,
    pub per_page: u32,
    pub has_more: bool,
}

impl From<Page<ArticleSummaryDto>> for ArticleListResponse {
    fn from(page: Page<ArticleSummaryDto>) -> Self {
        Self {
            items: page.items,
            page: page.page,
            per_page: page.per_page,
            has_more: page.has_more,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::archive::list_articles,
        crate::presentation::http::controllers::archive::read_article,
        crate::presentation::http::controllers::archive::read_shared,
        crate::presentation::http::controllers::archive::list_tags,
        crate::presentation::http::controllers::archive::get_tag,
        crate::presentation::http::controllers::archive::list_topics,
        crate::presentation::http::controllers::archive::get_topic,
        crate::presentation::http::controllers::editor::list_articles,
        crate::presentation::http::controllers::editor::create_draft,
        crate::presentation::http::controllers::editor::get_draft,
        crate::presentation::http::controllers::editor::revise_draft,
        crate::presentation::http::controllers::editor::discard_draft,
        crate::presentation::http::controllers::editor::publish_draft,
        crate::presentation::http::controllers::editor::share_draft,
        crate::presentation::http::controllers::editor::release_patch,
        crate::presentation::http::controllers::editor::attach_tag,
        crate::presentation::http::controllers::editor::detach_tag,
        crate::presentation::http::controllers::taxonomy::create_tag,
        crate::presentation::http::controllers::taxonomy::rename_tag,
        crate::presentation::http::controllers::taxonomy::delete_tag,
        crate::presentation::http::controllers::taxonomy::create_topic,
        crate::presentation::http::controllers::taxonomy::rename_topic,
        crate::presentation::http::controllers::taxonomy::delete_topic,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArticleListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::article_requests::DraftRequest,
            crate::presentation::http::controllers::article_requests::ReviseRequest,
            crate::presentation::http::controllers::article_requests::TermRequest,
            crate::presentation::http::controllers::article_requests::PublishResponse,
            crate::presentation::http::controllers::article_requests::DiscardResponse,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleSummaryDto,
            crate::application::dto::DraftCreatedDto,
            crate::application::dto::ShareLinkDto,
            crate::application::dto::TermDto
        )
    ),
    tags(
        (name = "Archive", description = "Public read-only article archive"),
        (name = "Editor", description = "Draft, publish, patch and share articles"),
        (name = "Taxonomy", description = "Tag and topic management"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Folio API",
        description = "Article lifecycle backend for a personal website",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

struct OpenApiDocument {
    body: Vec<u8>,
    etag: String,
}

static DOCUMENT: Lazy<Result<OpenApiDocument, String>> = Lazy::new(|| {
    let body = serde_json::to_vec(&ApiDoc::openapi()).map_err(|err| err.to_string())?;
    let etag = format!("\"{:x}\"", Sha256::digest(&body));
    Ok(OpenApiDocument { body, etag })
});

/// True when any entity tag in `If-None-Match` (weak or strong) names `etag`.
fn etag_matches(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get_all(header::IF_NONE_MATCH)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .map(|tag| tag.strip_prefix("W/").unwrap_or(tag))
        .any(|tag| tag == "*" || tag == etag)
}

/// GET /openapi.json, answering `304 Not Modified` to a matching `If-None-Match`.
pub async fn serve_openapi(headers: HeaderMap) -> Response {
    let document = match DOCUMENT.as_ref() {
        Ok(document) => document,
        Err(err) => {
            return HttpError::from_error(ApplicationError::internal(format!(
                "openapi serialization failed: {err}"
            )))
            .into_response();
        }
    };

    if etag_matches(&headers, &document.etag) {
        return (
            StatusCode::NOT_MODIFIED,
            [(header::ETAG, document.etag.clone())],
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::ETAG, document.etag.clone()),
        ],
        document.body.clone(),
    )
        .into_response()
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let doc = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "openapi/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}
