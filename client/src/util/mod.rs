//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers kept out of components so they can be unit tested natively.

pub mod chart;
pub mod image;
