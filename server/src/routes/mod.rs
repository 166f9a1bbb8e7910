//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the relayed activities endpoints and stitches them with
//! Leptos SSR rendering under a single Axum router. Compiled client assets are
//! served from `/pkg`.

pub mod activities;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::StartupError;
use crate::state::AppState;

/// Backend-facing routes the browser client calls.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/activities", get(activities::list_activities))
        .route("/activities/{name}/signup", post(activities::signup))
        .route("/activities/{name}/unregister", post(activities::unregister))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// API routes + Leptos SSR at `/` + compiled assets at `/pkg`.
///
/// # Errors
///
/// Returns [`StartupError::LeptosConfig`] if the Leptos configuration cannot
/// be loaded (missing or malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState) -> Result<Router, StartupError> {
    let conf = get_configuration(None).map_err(|e| StartupError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
