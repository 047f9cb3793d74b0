// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{archive, editor, taxonomy},
    middleware::require_editor,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Transport settings the router needs from configuration.
#[derive(Debug, Clone)]
pub struct RouterSettings {
    pub allowed_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".into()],
            request_timeout: Duration::from_secs(30),
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

fn archive_routes() -> Router {
    Router::new()
        .route("/api/v1/archive/articles", get(archive::list_articles))
        .route("/api/v1/archive/articles/{id}", get(archive::read_article))
        .route("/api/v1/archive/shared/{link}", get(archive::read_shared))
        .route("/api/v1/archive/tags", get(archive::list_tags))
        .route("/api/v1/archive/tags/{id}", get(archive::get_tag))
        .route("/api/v1/archive/topics", get(archive::list_topics))
        .route("/api/v1/archive/topics/{id}", get(archive::get_topic))
}

fn editor_routes() -> Router {
    Router::new()
        .route("/api/v1/me/articles", get(editor::list_articles))
        .route("/api/v1/me/drafts", post(editor::create_draft))
        .route(
            "/api/v1/me/drafts/{id}",
            get(editor::get_draft)
                .patch(editor::revise_draft)
                .delete(editor::discard_draft),
        )
        .route("/api/v1/me/drafts/{id}/publish", post(editor::publish_draft))
        .route("/api/v1/me/drafts/{id}/share", post(editor::share_draft))
        .route(
            "/api/v1/me/patches/{id}/release",
            post(editor::release_patch),
        )
        .route(
            "/api/v1/me/articles/{id}/tags/{tag_id}",
            put(editor::attach_tag).delete(editor::detach_tag),
        )
        .route("/api/v1/me/tags", post(taxonomy::create_tag))
        .route(
            "/api/v1/me/tags/{id}",
            put(taxonomy::rename_tag).delete(taxonomy::delete_tag),
        )
        .route("/api/v1/me/topics", post(taxonomy::create_topic))
        .route(
            "/api/v1/me/topics/{id}",
            put(taxonomy::rename_topic).delete(taxonomy::delete_topic),
        )
        .route_layer(middleware::from_fn(require_editor))
}

pub fn build_router(state: HttpState, settings: &RouterSettings) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi::serve_openapi))
        .merge(archive_routes())
        .merge(editor_routes())
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&settings.allowed_origins))
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
