//! Analytics dashboard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches `/api/analytics` once on mount. A failure replaces the whole view
//! with a fixed message; there is no retry or polling.

use advisor::analytics::{AnalyticsState, format_dollars};
use advisor::types::AnalyticsReport;
use leptos::prelude::*;

use crate::components::analytics_card::{AnalyticsCard, ChartContainer};
use crate::components::bar_chart::{BarChart, BarDatum};
use crate::components::pie_chart::PieChart;

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let analytics = RwSignal::new(AnalyticsState::default());

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let next = advisor::analytics::load(&crate::net::api::HttpApi).await;
            if analytics.try_set(next).is_some() {
                log::debug!("analytics page unmounted before the report arrived");
            }
        });
    }

    view! {
        <div class="analytics-page">
            {move || match analytics.get() {
                AnalyticsState::Loading => {
                    view! { <div class="analytics-page__status">"Loading analytics..."</div> }.into_any()
                }
                AnalyticsState::Failed(message) => {
                    view! { <div class="analytics-page__error" role="alert">{message}</div> }.into_any()
                }
                AnalyticsState::Loaded(report) => view! { <AnalyticsDashboard report=report/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn AnalyticsDashboard(report: AnalyticsReport) -> impl IntoView {
    let cards = report
        .summary_cards()
        .into_iter()
        .map(|card| view! { <AnalyticsCard title=card.title value=card.value/> })
        .collect::<Vec<_>>();
    let brands = brand_bars(&report);
    let categories = category_bars(&report);
    let slices = report.material_slices();

    view! {
        <div class="analytics-dashboard">
            <div class="analytics-dashboard__cards">{cards}</div>
            <div class="analytics-dashboard__charts">
                <ChartContainer title="Top 10 Brands by Product Count">
                    <BarChart data=brands series_name="Product Count"/>
                </ChartContainer>
                <ChartContainer title="Top 10 Categories by Avg. Price">
                    <BarChart data=categories series_name="Average Price"/>
                </ChartContainer>
            </div>
            <ChartContainer title="Material Distribution (Top 10)">
                <PieChart slices=slices/>
            </ChartContainer>
        </div>
    }
}

#[allow(clippy::cast_precision_loss)]
fn brand_bars(report: &AnalyticsReport) -> Vec<BarDatum> {
    report
        .top_brands()
        .iter()
        .map(|b| BarDatum {
            label: b.brand.clone(),
            value: b.product_count as f64,
            value_label: b.product_count.to_string(),
        })
        .collect()
}

fn category_bars(report: &AnalyticsReport) -> Vec<BarDatum> {
    report
        .top_categories()
        .into_iter()
        .map(|c| BarDatum {
            label: c.primary_category.clone(),
            value: c.price,
            value_label: format_dollars(c.price),
        })
        .collect()
}
