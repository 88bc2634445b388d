//! Error taxonomy for backend calls.
//!
//! Every variant collapses to one fixed user-facing message per endpoint;
//! the variant and its detail only ever reach diagnostic logs.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single request/response cycle against the backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, CORS, DNS).
    #[error("network failure: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("backend returned status {status}")]
    Http { status: u16 },

    /// The body was not valid JSON or did not match the expected shape.
    #[error("response parse failed: {0}")]
    Parse(String),
}

impl ApiError {
    /// Map a status code to `Ok(())` for the 2xx range and `Http` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] for any status outside `200..=299`.
    pub fn check_status(status: u16) -> Result<(), Self> {
        if (200..300).contains(&status) { Ok(()) } else { Err(Self::Http { status }) }
    }

    /// Short machine-friendly label used in log lines.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Http { .. } => "http",
            Self::Parse(_) => "parse",
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
