//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled HTTP client and the backend base URL; both are cheap to
//! clone per request.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::error::StartupError;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Backend base URL without a trailing slash.
    pub backend_url: Arc<str>,
}

impl AppState {
    /// Build state with an HTTP client bounded by the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError::HttpClientBuild`] if the TLS backend cannot be
    /// initialised.
    pub fn new(config: &ServerConfig) -> Result<Self, StartupError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.backend_timeout_secs))
            .build()
            .map_err(|e| StartupError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, backend_url: Arc::from(config.backend_url.as_str()) })
    }
}
