//! Analytics dashboard state and chart derivations.
//!
//! The dashboard fetches once on mount and never retries, so its state is a
//! plain three-way enum. Derivations slice the report into the chart
//! datasets and tolerate short or empty inputs.

use crate::error::ApiError;
use crate::types::{AnalyticsReport, BrandCount, CategoryPrice};

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

/// Message shown for any analytics failure, whatever the cause.
pub const ANALYTICS_FAILED_MESSAGE: &str = "Could not fetch analytics data. Is the backend server running?";

/// Maximum number of items per chart.
pub const TOP_N: usize = 10;

/// Colours cycled over pie slices.
pub const PALETTE: [&str; 5] = ["#0ea5e9", "#38bdf8", "#7dd3fc", "#a5f3fc", "#ecfeff"];

/// Lifecycle of the one-shot analytics fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AnalyticsState {
    #[default]
    Loading,
    Loaded(AnalyticsReport),
    Failed(String),
}

impl AnalyticsState {
    /// Fold a fetch result into view state, logging the raw cause on failure.
    #[must_use]
    pub fn from_result(result: Result<AnalyticsReport, ApiError>) -> Self {
        match result {
            Ok(report) => Self::Loaded(report),
            Err(err) => {
                log::warn!("analytics request failed ({}): {err}", err.kind());
                Self::Failed(ANALYTICS_FAILED_MESSAGE.to_owned())
            }
        }
    }
}

/// Transport for `GET /api/analytics`.
#[allow(async_fn_in_trait)]
pub trait AnalyticsSource {
    /// Fetch the aggregate report.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures, non-2xx statuses, or
    /// bodies that do not match [`AnalyticsReport`].
    async fn analytics(&self) -> Result<AnalyticsReport, ApiError>;
}

/// Fetch the report once and fold the result.
pub async fn load<A: AnalyticsSource>(source: &A) -> AnalyticsState {
    AnalyticsState::from_result(source.analytics().await)
}

// =============================================================================
// DERIVATIONS
// =============================================================================

/// A labelled value for one summary card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: String,
}

/// One pie slice with its share of the sliced total.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialSlice {
    pub material: String,
    pub count: u64,
    pub share: f64,
    pub color: &'static str,
}

/// Render a dollar amount with two decimals.
#[must_use]
pub fn format_dollars(value: f64) -> String {
    format!("${value:.2}")
}

impl AnalyticsReport {
    /// The four headline cards in display order.
    #[must_use]
    pub fn summary_cards(&self) -> [SummaryCard; 4] {
        let m = &self.key_metrics;
        [
            SummaryCard { title: "Total Products", value: m.total_products.to_string() },
            SummaryCard { title: "Unique Brands", value: m.unique_brands.to_string() },
            SummaryCard { title: "Average Price", value: format_dollars(m.average_price) },
            SummaryCard { title: "Unique Categories", value: m.unique_categories.to_string() },
        ]
    }

    /// First [`TOP_N`] brands as sent (the backend sorts them).
    #[must_use]
    pub fn top_brands(&self) -> &[BrandCount] {
        &self.products_by_brand[..self.products_by_brand.len().min(TOP_N)]
    }

    /// First [`TOP_N`] categories with a positive average price.
    #[must_use]
    pub fn top_categories(&self) -> Vec<&CategoryPrice> {
        self.avg_price_by_category
            .iter()
            .filter(|c| c.price > 0.0)
            .take(TOP_N)
            .collect()
    }

    /// First [`TOP_N`] materials with their share of the sliced total.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn material_slices(&self) -> Vec<MaterialSlice> {
        let top = &self.material_distribution[..self.material_distribution.len().min(TOP_N)];
        let total: u64 = top.iter().map(|m| m.count).sum();
        top.iter()
            .enumerate()
            .map(|(i, m)| MaterialSlice {
                material: m.material.clone(),
                count: m.count,
                share: if total == 0 { 0.0 } else { m.count as f64 / total as f64 },
                color: PALETTE[i % PALETTE.len()],
            })
            .collect()
    }
}
