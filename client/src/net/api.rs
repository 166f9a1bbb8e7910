//! REST API helpers for the activities backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning an error, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` so flows can tell a transport
//! failure from a backend rejection without panicking inside a spawned task.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::ActivityReply;
use super::types::ActivityCollection;
use crate::util::url::encode_component;

/// Listing endpoint, relative to the page origin.
pub const ACTIVITIES_ENDPOINT: &str = "/activities";

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("unexpected status: {0}")]
    Status(u16),
    /// The response body was not the JSON we expected.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Result of `POST /activities/{name}/signup`. The body is decoded for both
/// success and failure statuses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupResponse {
    /// Whether the status was 2xx.
    pub ok: bool,
    pub message: Option<String>,
    pub detail: Option<String>,
}

fn activity_action_endpoint(activity: &str, action: &str, email: &str) -> String {
    format!(
        "{ACTIVITIES_ENDPOINT}/{}/{action}?email={}",
        encode_component(activity),
        encode_component(email)
    )
}

/// `POST` target for signing `email` up to `activity`.
pub fn signup_endpoint(activity: &str, email: &str) -> String {
    activity_action_endpoint(activity, "signup", email)
}

/// `POST` target for removing `email` from `activity`.
pub fn unregister_endpoint(activity: &str, email: &str) -> String {
    activity_action_endpoint(activity, "unregister", email)
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(ok: bool, status: u16) -> Result<(), ApiError> {
    if ok { Ok(()) } else { Err(ApiError::Status(status)) }
}

/// Fetch the full activity listing from `GET /activities`.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] if the request fails, [`ApiError::Status`]
/// on a non-2xx response, and [`ApiError::Decode`] if the body is not an
/// activity mapping.
pub async fn fetch_activities() -> Result<ActivityCollection, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ACTIVITIES_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        check_status(resp.ok(), resp.status())?;
        resp.json::<ActivityCollection>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Sign `email` up for `activity` via `POST /activities/{name}/signup`.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] if the request fails and
/// [`ApiError::Decode`] if the body (success or failure) is not JSON. A
/// non-2xx status is not an error here; it is reported through
/// [`SignupResponse::ok`].
pub async fn signup(activity: &str, email: &str) -> Result<SignupResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = signup_endpoint(activity, email);
        let resp = gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let ok = resp.ok();
        let body: ActivityReply = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(SignupResponse { ok, message: body.message, detail: body.detail })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (activity, email);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Remove `email` from `activity` via `POST /activities/{name}/unregister`.
///
/// The response body is ignored; only the status matters.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] if the request fails and
/// [`ApiError::Status`] on a non-2xx response.
pub async fn unregister(activity: &str, email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = unregister_endpoint(activity, email);
        let resp = gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        check_status(resp.ok(), resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (activity, email);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}
