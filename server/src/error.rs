//! Failures that stop the server before it starts listening.

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The pooled HTTP client for the backend could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The `[[workspace.metadata.leptos]]` settings could not be loaded.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
