//! Page modules for the top-level views.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its view-scoped state and orchestration and delegates
//! rendering details to `components`.

pub mod analytics;
pub mod recommend;
