//! Relay for the backend JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only talks to this origin. `/api/recommend` and
//! `/api/analytics` are forwarded verbatim to the configured backend and the
//! upstream status and body are relayed back, so the client sees exactly what
//! the backend said. Only a transport failure is answered locally (502).

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Errors raised while talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The backend could not be reached or did not answer in time.
    #[error("backend unreachable: {0}")]
    Upstream(String),

    /// The backend answered but its body could not be read.
    #[error("backend body read failed: {0}")]
    Body(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}

/// `POST /api/recommend`.
pub async fn recommend(State(state): State<AppState>, body: Bytes) -> Response {
    forward(&state, reqwest::Method::POST, advisor::RECOMMEND_PATH, Some(body)).await
}

/// `GET /api/analytics`.
pub async fn analytics(State(state): State<AppState>) -> Response {
    forward(&state, reqwest::Method::GET, advisor::ANALYTICS_PATH, None).await
}

async fn forward(state: &AppState, method: reqwest::Method, path: &str, body: Option<Bytes>) -> Response {
    let url = state.upstream_url(path);
    match relay(state, method, &url, body).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(%url, error = %e, "backend request failed");
            e.into_response()
        }
    }
}

async fn relay(state: &AppState, method: reqwest::Method, url: &str, body: Option<Bytes>) -> Result<Response, ProxyError> {
    let mut request = state.http.request(method, url);
    if let Some(body) = body {
        request = request.header(CONTENT_TYPE.as_str(), "application/json").body(body);
    }

    let upstream = request.send().await.map_err(|e| ProxyError::Upstream(e.to_string()))?;
    let status = StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(CONTENT_TYPE.as_str())
        .and_then(|v| HeaderValue::from_bytes(v.as_bytes()).ok())
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));
    let bytes = upstream.bytes().await.map_err(|e| ProxyError::Body(e.to_string()))?;

    if status.is_success() {
        tracing::debug!(%url, status = status.as_u16(), "relayed backend response");
    } else {
        tracing::warn!(%url, status = status.as_u16(), "backend returned error status");
    }

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    response.headers_mut().insert(CONTENT_TYPE, content_type);
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
