//! Book card shown in every grid and shelf.

use leptos::prelude::*;

use shared::dto::books::BookSummary;
use shared::utils::format_rating;

use crate::utils::format::format_reads;
use crate::utils::media::cover_url;

#[component]
pub fn BookCard(
    #[prop(into)] book: Signal<BookSummary>,
    /// Whether the book is in the user's favorites right now.
    #[prop(into)] is_favorite: Signal<bool>,
    /// Fired with the book id when the heart is clicked.
    on_toggle_favorite: Callback<String>,
    /// Fired with the full summary when the card body is clicked.
    on_select: Callback<BookSummary>,
) -> impl IntoView {
    let cover = move || {
        book.with(|b| cover_url(b.cover_image_url.as_deref(), &b.title))
    };
    let reads = move || {
        book.with(|b| b.unique_readers_count.map(format_reads))
    };

    view! {
        <div class="book-card">
            <button
                class=move || {
                    if is_favorite.get() { "favorite-btn favorite-active" } else { "favorite-btn" }
                }
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_toggle_favorite.run(book.with(|b| b.id.clone()));
                }
            >
                "♥"
            </button>
            <div class="book-card-body" on:click=move |_| on_select.run(book.get())>
                <img class="book-cover" src=cover alt=move || book.with(|b| b.title.clone())/>
                <h3 class="book-title">{move || book.with(|b| b.title.clone())}</h3>
                <p class="book-author">{move || book.with(|b| b.author.clone())}</p>
                <div class="book-meta">
                    <span class="book-rating">
                        "★ " {move || book.with(|b| format_rating(b.average_rating))}
                    </span>
                    {move || reads().map(|r| view! { <span class="book-reads">{r}</span> })}
                </div>
            </div>
        </div>
    }
}
