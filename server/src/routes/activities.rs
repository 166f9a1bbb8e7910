//! Activities endpoints relayed to the backend.
//!
//! `GET /activities`, `POST /activities/{name}/signup`, and
//! `POST /activities/{name}/unregister` are forwarded as-is; the `{name}`
//! segment and `email` query stay percent-encoded exactly as the browser sent
//! them.

use axum::extract::State;
use axum::http::{Method, Uri};
use axum::response::Response;

use crate::proxy::{self, ProxyError};
use crate::state::AppState;

/// `GET /activities` — full activity listing.
pub async fn list_activities(State(state): State<AppState>, uri: Uri) -> Result<Response, ProxyError> {
    proxy::forward(&state, Method::GET, &uri).await
}

/// `POST /activities/{name}/signup?email=...`
pub async fn signup(State(state): State<AppState>, uri: Uri) -> Result<Response, ProxyError> {
    proxy::forward(&state, Method::POST, &uri).await
}

/// `POST /activities/{name}/unregister?email=...`
pub async fn unregister(State(state): State<AppState>, uri: Uri) -> Result<Response, ProxyError> {
    proxy::forward(&state, Method::POST, &uri).await
}

#[cfg(test)]
#[path = "activities_test.rs"]
mod tests;
