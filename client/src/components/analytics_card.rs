//! Summary card and chart frame for the analytics dashboard.

use leptos::prelude::*;

/// Headline metric with a small title above a large value.
#[component]
pub fn AnalyticsCard(title: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="analytics-card">
            <h3 class="analytics-card__title">{title}</h3>
            <p class="analytics-card__value">{value}</p>
        </div>
    }
}

/// Titled panel wrapping a chart.
#[component]
pub fn ChartContainer(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="chart-container">
            <h3 class="chart-container__title">{title}</h3>
            {children()}
        </section>
    }
}
