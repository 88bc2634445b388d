//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they render values handed to them by pages
//! and only read shared state for navigation.

pub mod analytics_card;
pub mod bar_chart;
pub mod chat_message;
pub mod nav_link;
pub mod pie_chart;
pub mod recommendation_card;
