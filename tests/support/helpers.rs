// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryArticles, InMemoryTaxonomy};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use folio_core::application::commands::articles::{
    DraftArticleCommand, PublishCommand, ReviseArticleCommand,
};
use folio_core::application::ports::{time::Clock, util::SlugGenerator};
use folio_core::application::services::ApplicationServices;
use folio_core::domain::article::ArticleId;
use folio_core::infrastructure::util::KebabSlugGenerator;
use folio_core::presentation::http::{
    middleware::EditorCredential,
    routes::{RouterSettings, build_router},
    state::HttpState,
};
use serde_json::Value;
use std::sync::Arc;

pub const EDITOR_TOKEN: &str = "test-editor-token-0123456789abcdef";

/// Services wired over in-memory stores, with handles on every store so tests
/// can seed and inspect state directly.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub articles: Arc<InMemoryArticles>,
    pub tags: Arc<InMemoryTaxonomy>,
    pub topics: Arc<InMemoryTaxonomy>,
    pub clock: Arc<FixedClock>,
}

impl TestApp {
    pub fn new() -> Self {
        let tags = Arc::new(InMemoryTaxonomy::new());
        let topics = Arc::new(InMemoryTaxonomy::new());
        let articles = Arc::new(InMemoryArticles::new(Arc::clone(&tags), Arc::clone(&topics)));
        let clock = Arc::new(FixedClock::new());
        let slugger: Arc<dyn SlugGenerator> = Arc::new(KebabSlugGenerator);

        let services = Arc::new(ApplicationServices::new(
            articles.clone(),
            articles.clone(),
            tags.clone(),
            topics.clone(),
            clock.clone() as Arc<dyn Clock>,
            slugger,
        ));

        Self {
            services,
            articles,
            tags,
            topics,
            clock,
        }
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
            editor: EditorCredential::new(EDITOR_TOKEN),
        };
        build_router(state, &RouterSettings::default())
    }

    pub async fn draft(&self, title: &str, content: &str) -> ArticleId {
        self.services
            .article_commands
            .draft_article(DraftArticleCommand {
                title: title.into(),
                content: Some(content.into()),
            })
            .await
            .expect("draft")
    }

    pub async fn published(&self, title: &str, content: &str) -> ArticleId {
        let id = self.draft(title, content).await;
        self.services
            .article_commands
            .publish(PublishCommand { id: id.to_string() })
            .await
            .expect("publish");
        id
    }

    pub async fn revise(&self, command: ReviseArticleCommand) {
        self.services
            .article_commands
            .revise(command)
            .await
            .expect("revise");
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Request against the editor surface, authenticated with [`EDITOR_TOKEN`].
pub fn editor_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {EDITOR_TOKEN}"));
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub fn public_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert that a response is an `ErrorResponse` JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = json_body(resp).await;
    assert_eq!(json["error"], expected_error, "unexpected body: {json}");
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message field in ErrorResponse"
    );
    json
}
