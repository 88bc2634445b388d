//! Reactive host for the recommendation conversation.
//!
//! The signal is created by the recommendation page and disposed with it, so
//! a response that lands after navigation finds no state and is dropped.

use advisor::conversation::{ConversationState, ConversationStore};
use leptos::prelude::*;

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

/// `RwSignal` wrapper that the `advisor` controller can drive.
#[derive(Clone, Copy, Debug)]
pub struct ConversationSignal(pub RwSignal<ConversationState>);

impl ConversationSignal {
    #[must_use]
    pub fn new() -> Self {
        Self(RwSignal::new(ConversationState::default()))
    }

    /// Number of history entries (tracked). Entries are only ever appended,
    /// so this changes exactly when the history does.
    #[must_use]
    pub fn entry_count(self) -> usize {
        self.0.with(|s| s.entries.len())
    }
}

impl Default for ConversationSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationStore for ConversationSignal {
    fn with_state<R>(&self, f: impl FnOnce(&mut ConversationState) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}
