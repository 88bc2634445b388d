use futures::executor::block_on;

use super::*;
use crate::types::{KeyMetrics, MaterialCount};

fn report(brands: usize, categories: &[f64], materials: &[u64]) -> AnalyticsReport {
    AnalyticsReport {
        key_metrics: KeyMetrics { total_products: 312, unique_brands: 40, average_price: 88.456, unique_categories: 12 },
        products_by_brand: (0..brands)
            .map(|i| BrandCount { brand: format!("Brand {i}"), product_count: 100 - i as u64 })
            .collect(),
        avg_price_by_category: categories
            .iter()
            .enumerate()
            .map(|(i, p)| CategoryPrice { primary_category: format!("Cat {i}"), price: *p })
            .collect(),
        material_distribution: materials
            .iter()
            .enumerate()
            .map(|(i, c)| MaterialCount { material: format!("Mat {i}"), count: *c })
            .collect(),
    }
}

struct Fixed(Result<AnalyticsReport, ApiError>);

impl AnalyticsSource for Fixed {
    async fn analytics(&self) -> Result<AnalyticsReport, ApiError> {
        self.0.clone()
    }
}

// =============================================================
// AnalyticsState
// =============================================================

#[test]
fn analytics_state_defaults_to_loading() {
    assert_eq!(AnalyticsState::default(), AnalyticsState::Loading);
}

#[test]
fn load_success_is_loaded() {
    let data = report(3, &[10.0], &[1]);
    assert_eq!(block_on(load(&Fixed(Ok(data.clone())))), AnalyticsState::Loaded(data));
}

#[test]
fn load_failure_uses_fixed_message_for_every_cause() {
    for err in [
        ApiError::Network("refused".to_owned()),
        ApiError::Http { status: 404 },
        ApiError::Parse("missing keyMetrics".to_owned()),
    ] {
        assert_eq!(
            block_on(load(&Fixed(Err(err)))),
            AnalyticsState::Failed(ANALYTICS_FAILED_MESSAGE.to_owned())
        );
    }
}

// =============================================================
// Summary cards
// =============================================================

#[test]
fn summary_cards_render_four_values_in_order() {
    let cards = report(0, &[], &[]).summary_cards();
    let rendered: Vec<_> = cards.iter().map(|c| (c.title, c.value.as_str())).collect();
    assert_eq!(
        rendered,
        vec![
            ("Total Products", "312"),
            ("Unique Brands", "40"),
            ("Average Price", "$88.46"),
            ("Unique Categories", "12"),
        ]
    );
}

#[test]
fn format_dollars_pads_to_two_decimals() {
    assert_eq!(format_dollars(5.0), "$5.00");
    assert_eq!(format_dollars(1.234), "$1.23");
}

// =============================================================
// Slicing
// =============================================================

#[test]
fn top_brands_slices_to_ten() {
    let r = report(14, &[], &[]);
    let top = r.top_brands();
    assert_eq!(top.len(), TOP_N);
    assert_eq!(top[0].brand, "Brand 0");
    assert_eq!(top[9].brand, "Brand 9");
}

#[test]
fn top_brands_tolerates_short_and_empty_inputs() {
    assert_eq!(report(3, &[], &[]).top_brands().len(), 3);
    assert!(report(0, &[], &[]).top_brands().is_empty());
}

#[test]
fn top_categories_drops_non_positive_prices_before_slicing() {
    let mut prices = vec![0.0, -1.0];
    prices.extend((1..=12).map(f64::from));
    let r = report(0, &prices, &[]);

    let top = r.top_categories();
    assert_eq!(top.len(), TOP_N);
    assert!(top.iter().all(|c| c.price > 0.0));
    assert_eq!(top[0].primary_category, "Cat 2");
}

#[test]
fn top_categories_tolerates_short_input() {
    let r = report(0, &[0.0, 25.0], &[]);
    let top = r.top_categories();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].primary_category, "Cat 1");
}

#[test]
fn material_slices_share_sums_to_one_and_cycles_palette() {
    let r = report(0, &[], &[4, 3, 2, 1, 5, 5]);
    let slices = r.material_slices();

    assert_eq!(slices.len(), 6);
    let total: f64 = slices.iter().map(|s| s.share).sum();
    assert!((total - 1.0).abs() < 1e-9);
    assert!((slices[0].share - 0.2).abs() < 1e-9);
    assert_eq!(slices[0].color, PALETTE[0]);
    assert_eq!(slices[5].color, PALETTE[0]);
    assert_eq!(slices[4].color, PALETTE[4]);
}

#[test]
fn material_slices_only_count_the_top_ten() {
    let counts: Vec<u64> = vec![1; 12];
    let slices = report(0, &[], &counts).material_slices();
    assert_eq!(slices.len(), TOP_N);
    assert!((slices[0].share - 0.1).abs() < 1e-9);
}

#[test]
fn material_slices_with_zero_total_have_zero_share() {
    let slices = report(0, &[], &[0, 0]).material_slices();
    assert!(slices.iter().all(|s| s.share == 0.0));
}
