//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `ui` is app-wide and provided through context; `conversation` adapts the
//! page-scoped recommendation signal to the `advisor` controller.

pub mod conversation;
pub mod ui;
