//! Recommendation chat page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the conversation signal for as long as the view is mounted. Submits
//! run through `advisor::conversation::submit`, which guards against blank
//! prompts and overlapping requests and appends exactly one result entry.

use advisor::conversation::{ConversationEntry, ConversationState};
use leptos::prelude::*;

use crate::components::chat_message::ChatMessage;
use crate::state::conversation::ConversationSignal;

/// Input placeholder.
pub const PROMPT_PLACEHOLDER: &str = "e.g., 'a modern wooden chair for my office'";

/// Chat history, loading indicator, error banner, and prompt form.
#[component]
pub fn RecommendPage() -> impl IntoView {
    let store = ConversationSignal::new();
    let conversation = store.0;

    // History is append-only, so its length is enough to detect changes
    // without cloning it on every keystroke.
    let entry_count = Memo::new(move |_| store.entry_count());
    let is_loading = Memo::new(move |_| conversation.with(|s| s.is_loading));
    let last_error = Memo::new(move |_| conversation.with(|s| s.last_error.clone()));
    let can_send = Memo::new(move |_| conversation.with(|s| s.can_submit(&s.pending_input)));

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest entry in view.
    Effect::new(move || {
        let _ = entry_count.get();
        let _ = is_loading.get();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let prompt = conversation.with_untracked(|s| s.pending_input.clone());
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let outcome =
                    advisor::conversation::submit(&store, &crate::net::api::HttpApi, &prompt).await;
                log::debug!("recommendation submit finished: {outcome:?}");
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (prompt, store);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    view! {
        <div class="recommend-page">
            <div class="recommend-page__messages" node_ref=messages_ref>
                <Show when=move || entry_count.get() == 0>
                    <WelcomeMessage/>
                </Show>
                {move || {
                    let _ = entry_count.get();
                    conversation
                        .with_untracked(|s| s.entries.clone())
                        .into_iter()
                        .map(|entry: ConversationEntry| view! { <ChatMessage entry=entry/> })
                        .collect::<Vec<_>>()
                }}
                <Show when=move || is_loading.get()>
                    <LoadingMessage/>
                </Show>
            </div>

            <div class="recommend-page__composer">
                {move || {
                    last_error
                        .get()
                        .map(|err| view! { <div class="recommend-page__error">{err}</div> })
                }}
                <form class="composer" on:submit=on_submit>
                    <input
                        class="composer__input"
                        type="text"
                        placeholder=PROMPT_PLACEHOLDER
                        disabled=move || is_loading.get()
                        prop:value=move || conversation.with(|s| s.pending_input.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            conversation.update(|s: &mut ConversationState| s.pending_input = value);
                        }
                    />
                    <button class="btn btn--primary composer__send" type="submit" disabled=move || !can_send.get()>
                        "Send"
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Greeting shown while the history is empty.
#[component]
fn WelcomeMessage() -> impl IntoView {
    view! {
        <div class="welcome-message">
            <h2 class="welcome-message__title">"Welcome to the Ikarus Product Advisor!"</h2>
            <p class="welcome-message__body">
                "Describe the furniture you're looking for, and I'll find the best recommendations for you."
            </p>
        </div>
    }
}

#[component]
fn LoadingMessage() -> impl IntoView {
    view! {
        <div class="loading-message" aria-live="polite">
            <span class="loading-message__dot"></span>
            <span class="loading-message__dot"></span>
            <span class="loading-message__dot"></span>
            <span class="loading-message__text">"Finding recommendations..."</span>
        </div>
    }
}
