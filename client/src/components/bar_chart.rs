//! Vertical bar chart rendered as inline SVG.

use leptos::prelude::*;

use crate::util::chart::bar_layout;

const VIEW_WIDTH: f64 = 600.0;
const VIEW_HEIGHT: f64 = 300.0;
const PLOT_HEIGHT: f64 = 240.0;
const LABEL_OFFSET: f64 = 16.0;

/// One labelled value.
#[derive(Clone, Debug, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
    pub value_label: String,
}

/// Bar chart with category labels under each bar and the value as a tooltip.
#[component]
pub fn BarChart(data: Vec<BarDatum>, #[prop(into)] series_name: String) -> impl IntoView {
    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    let bars = bar_layout(&values, VIEW_WIDTH, PLOT_HEIGHT);

    let items = data
        .into_iter()
        .zip(bars)
        .map(|(datum, bar)| {
            let tooltip = format!("{}\n{series_name}: {}", datum.label, datum.value_label);
            let label_y = PLOT_HEIGHT + LABEL_OFFSET;
            view! {
                <g class="bar-chart__item">
                    <rect
                        class="bar-chart__bar"
                        x=bar.x
                        y=bar.y
                        width=bar.width
                        height=bar.height
                    >
                        <title>{tooltip}</title>
                    </rect>
                    <text
                        class="bar-chart__label"
                        x=bar.label_x
                        y=label_y
                        text-anchor="end"
                        transform=format!("rotate(-30 {} {label_y})", bar.label_x)
                    >
                        {datum.label}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg
            class="bar-chart"
            viewBox=format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
            preserveAspectRatio="xMidYMid meet"
            role="img"
        >
            <line class="bar-chart__axis" x1="0" y1=PLOT_HEIGHT x2=VIEW_WIDTH y2=PLOT_HEIGHT/>
            {items}
        </svg>
    }
}
