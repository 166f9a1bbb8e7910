//! Forwarding of the activities endpoints to the backend.
//!
//! The browser client only knows relative URLs (`/activities/...`), so this
//! host relays those requests to `BACKEND_URL` with the path and query kept
//! byte-for-byte. Status code, `content-type`, and body come back unchanged.

use axum::Json;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// `detail` returned to the browser when the backend cannot be reached.
pub const BACKEND_UNAVAILABLE_DETAIL: &str = "Activities backend is unavailable";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The backend request failed before a full response was read.
    #[error("backend request failed: {0}")]
    Upstream(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let Self::Upstream(reason) = self;
        tracing::debug!(%reason, "answering with bad gateway");
        (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "detail": BACKEND_UNAVAILABLE_DETAIL }))).into_response()
    }
}

/// Backend URL for an incoming request URI, keeping its encoded path and query.
pub fn upstream_url(backend_url: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or(uri.path(), |pq| pq.as_str());
    format!("{backend_url}{path_and_query}")
}

/// Relay one request to the backend and mirror its response.
///
/// # Errors
///
/// Returns [`ProxyError::Upstream`] when the backend is unreachable, times
/// out, or drops the connection mid-body.
pub async fn forward(state: &AppState, method: Method, uri: &Uri) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.backend_url, uri);
    tracing::debug!(%method, %url, "forwarding to backend");

    let upstream = state
        .http
        .request(method.clone(), &url)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, %method, %url, "backend request failed");
            ProxyError::Upstream(e.to_string())
        })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let body = upstream.bytes().await.map_err(|e| {
        tracing::warn!(error = %e, %method, %url, "backend body read failed");
        ProxyError::Upstream(e.to_string())
    })?;

    let mut response = (status, body).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
