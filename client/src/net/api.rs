//! REST API transport for the recommendation and analytics endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a network error since these endpoints
//! are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an `ApiError`; the `advisor` state machines
//! decide what the user sees.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use advisor::ApiError;
use advisor::analytics::AnalyticsSource;
use advisor::conversation::RecommendationSource;
#[cfg(any(test, feature = "hydrate"))]
use advisor::types::RecommendRequest;
use advisor::types::{AnalyticsReport, Recommendation};

/// Browser HTTP client for the backend API.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

#[cfg(any(test, feature = "hydrate"))]
fn recommend_request(prompt: &str) -> RecommendRequest {
    RecommendRequest { prompt: prompt.to_owned() }
}

#[cfg(any(test, feature = "hydrate"))]
fn network_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Check the status first, then decode; a non-2xx body is never parsed.
#[cfg(any(test, feature = "hydrate"))]
fn decode_response<T>(
    status: u16,
    body: &str,
    decode: fn(&str) -> Result<T, ApiError>,
) -> Result<T, ApiError> {
    ApiError::check_status(status)?;
    decode(body)
}

#[cfg(not(feature = "hydrate"))]
fn unavailable_on_server() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

impl RecommendationSource for HttpApi {
    /// `POST /api/recommend` with `{"prompt": ...}`.
    async fn recommend(&self, prompt: &str) -> Result<Vec<Recommendation>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(advisor::RECOMMEND_PATH)
                .json(&recommend_request(prompt))
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            let status = resp.status();
            let body = resp.text().await.map_err(network_error)?;
            decode_response(status, &body, advisor::types::decode_recommendations)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = prompt;
            Err(unavailable_on_server())
        }
    }
}

impl AnalyticsSource for HttpApi {
    /// `GET /api/analytics`.
    async fn analytics(&self) -> Result<AnalyticsReport, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(advisor::ANALYTICS_PATH)
                .send()
                .await
                .map_err(network_error)?;
            let status = resp.status();
            let body = resp.text().await.map_err(network_error)?;
            decode_response(status, &body, advisor::types::decode_analytics)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(unavailable_on_server())
        }
    }
}
