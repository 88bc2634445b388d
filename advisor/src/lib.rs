//! Framework-agnostic core for the product advisor.
//!
//! This crate owns the wire schema shared by `client` and `server`, the
//! conversation state machine behind the recommendation chat, and the
//! analytics derivations behind the dashboard. It has no UI or transport
//! dependency so both native tests and the WASM client can drive it.
//!
//! Transports plug in through [`conversation::RecommendationSource`] and
//! [`analytics::AnalyticsSource`]; state hosts plug in through
//! [`conversation::ConversationStore`].

pub mod analytics;
pub mod conversation;
pub mod error;
pub mod types;

pub use error::ApiError;

/// Path of the recommendation endpoint (`POST`).
pub const RECOMMEND_PATH: &str = "/api/recommend";

/// Path of the analytics endpoint (`GET`).
pub const ANALYTICS_PATH: &str = "/api/analytics";
