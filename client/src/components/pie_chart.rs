//! Pie chart with legend rendered as inline SVG.

use advisor::analytics::MaterialSlice;
use leptos::prelude::*;

use crate::util::chart::{percent_label, pie_layout};

const CENTER: f64 = 110.0;
const RADIUS: f64 = 100.0;

#[component]
pub fn PieChart(slices: Vec<MaterialSlice>) -> impl IntoView {
    let shares: Vec<f64> = slices.iter().map(|s| s.share).collect();
    let paths = pie_layout(&shares, CENTER, CENTER, RADIUS);

    let wedges = slices
        .iter()
        .zip(paths)
        .map(|(slice, d)| {
            let tooltip = format!("{}: {}", slice.material, slice.count);
            view! {
                <path class="pie-chart__wedge" d=d fill=slice.color>
                    <title>{tooltip}</title>
                </path>
            }
        })
        .collect::<Vec<_>>();

    let legend = slices
        .into_iter()
        .map(|slice| {
            let label = format!("{} {}", slice.material, percent_label(slice.share));
            view! {
                <li class="pie-chart__legend-item">
                    <span class="pie-chart__swatch" style:background-color=slice.color></span>
                    {label}
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="pie-chart">
            <svg class="pie-chart__svg" viewBox="0 0 220 220" role="img">
                {wedges}
            </svg>
            <ul class="pie-chart__legend">{legend}</ul>
        </div>
    }
}
