//! Recommendation conversation state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! A prompt becomes exactly one network round trip and exactly one result
//! entry. The cycle is split into two synchronous transitions on
//! [`ConversationState`] (`begin_submit`, `complete`) with a single async
//! suspension point between them, driven by [`submit`].
//!
//! ORDERING
//! ========
//! `is_loading` is the serialization guard: while it is set, further submits
//! are rejected silently, so at most one request is in flight and results are
//! applied in the order requests were issued.

use std::cell::RefCell;

use crate::error::ApiError;
use crate::types::Recommendation;

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

/// Message shown for any recommendation failure, whatever the cause.
pub const RECOMMEND_FAILED_MESSAGE: &str =
    "Sorry, something went wrong. Please check if the backend is running and try again.";

/// One item of the chat history.
#[derive(Clone, Debug, PartialEq)]
pub enum ConversationEntry {
    User { text: String },
    Ai { recommendations: Vec<Recommendation> },
    Error { message: String },
}

/// State owned by one recommendation view for its lifetime.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConversationState {
    pub entries: Vec<ConversationEntry>,
    pub pending_input: String,
    pub is_loading: bool,
    pub last_error: Option<String>,
}

impl ConversationState {
    /// Whether `prompt` would be accepted right now.
    #[must_use]
    pub fn can_submit(&self, prompt: &str) -> bool {
        !self.is_loading && !prompt.trim().is_empty()
    }

    /// Start a submit cycle.
    ///
    /// Returns the prompt to send, or `None` when the submit is rejected (blank
    /// prompt or a request already in flight). A rejected submit changes
    /// nothing.
    pub fn begin_submit(&mut self, prompt: &str) -> Option<String> {
        if !self.can_submit(prompt) {
            return None;
        }
        self.last_error = None;
        self.is_loading = true;
        self.entries.push(ConversationEntry::User { text: prompt.to_owned() });
        self.pending_input.clear();
        Some(prompt.to_owned())
    }

    /// Reconcile the outcome of the in-flight request.
    ///
    /// Appends exactly one entry and clears `is_loading`. Ignored when no
    /// request is in flight.
    pub fn complete(&mut self, outcome: Result<Vec<Recommendation>, ApiError>) {
        if !self.is_loading {
            log::debug!("ignoring recommendation result with no request in flight");
            return;
        }
        match outcome {
            Ok(recommendations) => {
                self.entries.push(ConversationEntry::Ai { recommendations });
            }
            Err(err) => {
                log::warn!("recommendation request failed ({}): {err}", err.kind());
                self.entries.push(ConversationEntry::Error { message: RECOMMEND_FAILED_MESSAGE.to_owned() });
                self.last_error = Some(RECOMMEND_FAILED_MESSAGE.to_owned());
            }
        }
        self.is_loading = false;
    }
}

// =============================================================================
// SEAMS
// =============================================================================

/// Where conversation state lives (a reactive signal in the UI, a `RefCell`
/// in tests).
pub trait ConversationStore {
    /// Run `f` against the state. Returns `None` if the state no longer exists
    /// (its view was torn down).
    fn with_state<R>(&self, f: impl FnOnce(&mut ConversationState) -> R) -> Option<R>;
}

impl ConversationStore for RefCell<ConversationState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut ConversationState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Transport for `POST /api/recommend`.
#[allow(async_fn_in_trait)]
pub trait RecommendationSource {
    /// Fetch recommendations for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures, non-2xx statuses, or
    /// bodies that are not a recommendation array.
    async fn recommend(&self, prompt: &str) -> Result<Vec<Recommendation>, ApiError>;
}

// =============================================================================
// DRIVER
// =============================================================================

/// What happened to a call to [`submit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank prompt or a request already in flight; nothing changed.
    Rejected,
    /// The request finished and its result entry was appended.
    Completed,
    /// The request finished after the state was dropped; the result was discarded.
    Discarded,
}

/// Run one full submit cycle: guard, request, reconcile.
pub async fn submit<S, A>(store: &S, source: &A, prompt: &str) -> SubmitOutcome
where
    S: ConversationStore,
    A: RecommendationSource,
{
    let Some(prompt) = store.with_state(|s| s.begin_submit(prompt)).flatten() else {
        return SubmitOutcome::Rejected;
    };

    let outcome = source.recommend(&prompt).await;

    if store.with_state(|s| s.complete(outcome)).is_some() {
        SubmitOutcome::Completed
    } else {
        log::debug!("conversation dropped before recommendation response arrived");
        SubmitOutcome::Discarded
    }
}
