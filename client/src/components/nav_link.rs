//! Header navigation button.

use leptos::prelude::*;

use crate::state::ui::{Page, UiState};

/// Button that switches the root view to `page`, highlighted while active.
#[component]
pub fn NavLink(page: Page) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active = move || ui.with(|u| u.page == page);

    view! {
        <button
            class="nav-link"
            class:nav-link--active=active
            aria-current=move || active().then_some("page")
            on:click=move |_| {
                ui.update(|u| {
                    u.navigate(page);
                });
            }
        >
            {page.label()}
        </button>
    }
}
