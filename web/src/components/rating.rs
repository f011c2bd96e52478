//! Five-star rating display, optionally interactive.

use leptos::prelude::*;
use shared::utils::{format_rating, rounded_stars};

#[component]
pub fn RatingStars(
    #[prop(into)] rating: Signal<f64>,
    /// When present the stars become clickable and submit 1..=5.
    #[prop(optional_no_strip)]
    on_rate: Option<Callback<u8>>,
) -> impl IntoView {
    let stars = move || {
        let filled = rounded_stars(rating.get());
        (1u8..=5)
            .map(|position| {
                let class = if position <= filled {
                    "star star-filled"
                } else {
                    "star"
                };
                match on_rate {
                    Some(on_rate) => view! {
                        <span
                            class=format!("{class} star-clickable")
                            on:click=move |_| on_rate.run(position)
                        >
                            "★"
                        </span>
                    }
                    .into_any(),
                    None => view! { <span class=class>"★"</span> }.into_any(),
                }
            })
            .collect_view()
    };

    view! {
        <span class="rating">
            {stars}
            <span class="rating-value">{move || format_rating(rating.get())}</span>
        </span>
    }
}
