//! Loading placeholders.

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-wrap">
            <div class="spinner"></div>
        </div>
    }
}

/// Grey placeholder cards shown while a book list loads.
#[component]
pub fn SkeletonGrid(#[prop(default = 4)] count: usize) -> impl IntoView {
    view! {
        <div class="book-grid">
            {(0..count)
                .map(|_| view! {
                    <div class="book-card skeleton">
                        <div class="skeleton-cover"></div>
                        <div class="skeleton-line"></div>
                        <div class="skeleton-line skeleton-line-short"></div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
