//! Product card for a single recommendation.

use advisor::types::Recommendation;
use leptos::prelude::*;

use crate::util::image::{fallback_src, initial_src};

#[component]
pub fn RecommendationCard(recommendation: Recommendation) -> impl IntoView {
    let Recommendation { product, generated_description } = recommendation;
    let image_src = RwSignal::new(initial_src(&product.image_url));
    let byline = product.byline();
    let price = product.price.to_string();

    let on_image_error = move |_| {
        if let Some(next) = image_src.with_untracked(|src| fallback_src(src)) {
            image_src.set(next.to_owned());
        }
    };

    view! {
        <article class="recommendation-card">
            <div class="recommendation-card__media">
                <img
                    class="recommendation-card__image"
                    src=move || image_src.get()
                    alt=product.title.clone()
                    on:error=on_image_error
                />
            </div>
            <div class="recommendation-card__body">
                <div>
                    <h3 class="recommendation-card__title">{product.title}</h3>
                    <p class="recommendation-card__byline">{byline}</p>
                    <p class="recommendation-card__description">{generated_description}</p>
                </div>
                <div class="recommendation-card__price">{price}</div>
            </div>
        </article>
    }
}
