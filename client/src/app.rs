//! Root application component with navigation and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::nav_link::NavLink;
use crate::pages::{analytics::AnalyticsPage, recommend::RecommendPage};
use crate::state::ui::{Page, UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the UI state context and swaps the main view on navigation.
/// Leaving a page unmounts it, which drops its page-scoped state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    let page = Memo::new(move |_| ui.with(|u| u.page));

    view! {
        <Stylesheet id="leptos" href="/pkg/advisor.css"/>
        <Title text="Ikarus Product Advisor"/>

        <div class="app">
            <header class="app__header">
                <nav class="app__nav">
                    <div class="app__brand">
                        <svg
                            class="app__logo"
                            xmlns="http://www.w3.org/2000/svg"
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        >
                            <path d="M20 9V7a2 2 0 0 0-2-2H6a2 2 0 0 0-2 2v2"/>
                            <path d="M2 11v2a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-2a2 2 0 0 0-4 0v2H6v-2a2 2 0 0 0-4 0Z"/>
                            <path d="M4 17v2"/>
                            <path d="M20 17v2"/>
                        </svg>
                        <h1 class="app__title">"Ikarus Product Advisor"</h1>
                    </div>
                    <div class="app__tabs">
                        {Page::ALL.into_iter().map(|p| view! { <NavLink page=p/> }).collect::<Vec<_>>()}
                    </div>
                </nav>
            </header>

            <main class="app__main">
                {move || match page.get() {
                    Page::Recommend => view! { <RecommendPage/> }.into_any(),
                    Page::Analytics => view! { <AnalyticsPage/> }.into_any(),
                }}
            </main>

            <footer class="app__footer">"Built for the Ikarus 3D Assignment."</footer>
        </div>
    }
}
