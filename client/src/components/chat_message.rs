//! One conversation entry rendered by its tag.
//!
//! SYSTEM CONTEXT
//! ==============
//! User prompts sit right-aligned, errors render as alerts in the history, and
//! AI entries expand into one card per recommendation keyed by product id.

use advisor::conversation::ConversationEntry;
use advisor::types::Recommendation;
use leptos::prelude::*;

use crate::components::recommendation_card::RecommendationCard;

#[component]
pub fn ChatMessage(entry: ConversationEntry) -> impl IntoView {
    match entry {
        ConversationEntry::User { text } => view! {
            <div class="chat-message chat-message--user">
                <p class="chat-message__bubble">{text}</p>
            </div>
        }
        .into_any(),
        ConversationEntry::Error { message } => view! {
            <div class="chat-message chat-message--error" role="alert">
                <p class="chat-message__bubble">{message}</p>
            </div>
        }
        .into_any(),
        ConversationEntry::Ai { recommendations } => view! {
            <div class="chat-message chat-message--ai">
                <For
                    each=move || recommendations.clone()
                    key=|rec: &Recommendation| rec.product.id.clone()
                    children=|rec: Recommendation| view! { <RecommendationCard recommendation=rec/> }
                />
            </div>
        }
        .into_any(),
    }
}
