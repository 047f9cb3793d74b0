// src/presentation/http/middleware/require_editor.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use sha2::{Digest, Sha256};

/// The editor's bearer token, held only as a SHA-256 digest.
#[derive(Clone)]
pub struct EditorCredential {
    digest: [u8; 32],
}

impl EditorCredential {
    pub fn new(token: &str) -> Self {
        Self {
            digest: Sha256::digest(token.as_bytes()).into(),
        }
    }

    /// Compares digests without short-circuiting on the first differing byte.
    pub fn verify(&self, presented: &str) -> bool {
        let presented: [u8; 32] = Sha256::digest(presented.as_bytes()).into();
        self.digest
            .iter()
            .zip(presented.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl std::fmt::Debug for EditorCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EditorCredential(..)")
    }
}

/// Guard for every `/api/v1/me` route.
///
/// Usage: `.route_layer(axum::middleware::from_fn(require_editor))`
pub async fn require_editor(req: Request<Body>, next: Next) -> Response {
    let Some(state) = req.extensions().get::<HttpState>() else {
        return HttpError::from_error(ApplicationError::internal("application state missing"))
            .into_response();
    };

    let Some(header) = req.headers().typed_get::<Authorization<Bearer>>() else {
        return HttpError::from_error(ApplicationError::unauthorized(
            "missing Authorization header",
        ))
        .into_response();
    };

    if !state.editor.verify(header.token()) {
        return HttpError::from_error(ApplicationError::unauthorized("invalid editor token"))
            .into_response();
    }

    next.run(req).await
}
