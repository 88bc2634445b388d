//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled outbound HTTP client and the backend base URL; both are
//! cheap to clone and never mutated after startup.

use std::sync::Arc;

use crate::config::{ConfigError, ServerConfig};

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub backend_url: Arc<str>,
}

impl AppState {
    /// Build the outbound client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &ServerConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()
            .map_err(|e| ConfigError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, backend_url: Arc::from(config.backend_url.as_str()) })
    }

    /// Absolute upstream URL for an API path such as `/api/recommend`.
    #[must_use]
    pub fn upstream_url(&self, path: &str) -> String {
        format!("{}{path}", self.backend_url)
    }
}
