//! Book detail modal: full summary, rating, download and read-online
//! actions, plus other books by the same author.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use shared::dto::books::BookSummary;

use crate::components::{Modal, RatingStars};
use crate::services::api;
use crate::utils::media::{cover_url, resolve_media_url};

#[component]
pub fn BookDetailModal(
    #[prop(into)] book: Signal<BookSummary>,
    #[prop(into)] is_favorite: Signal<bool>,
    on_toggle_favorite: Callback<String>,
    /// When present the star row submits ratings.
    #[prop(optional_no_strip)]
    on_rate: Option<Callback<u8>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let navigate = use_navigate();
    let (by_author, set_by_author) = signal(Vec::<BookSummary>::new());

    {
        let (author, id) = book.with_untracked(|b| (b.author.clone(), b.id.clone()));
        leptos::task::spawn_local(async move {
            match api::books::by_author(&author, &id).await {
                Ok(books) => set_by_author.set(books),
                Err(err) => log::warn!("Failed to load books by author: {err}"),
            }
        });
    }

    let read_online = move |_| {
        let id = book.with_untracked(|b| b.id.clone());
        navigate(&format!("/reader/{id}"), Default::default());
    };

    let download = move |_| {
        let path = book.with_untracked(|b| b.file_path.clone());
        if let (Some(path), Some(window)) = (path, web_sys::window()) {
            let url = resolve_media_url(&path);
            if let Err(err) = window.open_with_url_and_target(&url, "_blank") {
                log::error!("Failed to open download: {err:?}");
            }
        }
    };

    view! {
        <Modal title=book.with_untracked(|b| b.title.clone()) on_close=on_close>
            <div class="book-detail">
                <img
                    class="book-detail-cover"
                    src=move || book.with(|b| cover_url(b.cover_image_url.as_deref(), &b.title))
                />
                <div class="book-detail-info">
                    <p class="book-author">{move || book.with(|b| b.author.clone())}</p>
                    <RatingStars
                        rating=Signal::derive(move || book.with(|b| b.average_rating))
                        on_rate=on_rate
                    />
                    <div class="genre-tags">
                        {move || {
                            book.with(|b| {
                                b.genre
                                    .iter()
                                    .map(|g| view! { <span class="genre-tag">{g.clone()}</span> })
                                    .collect_view()
                            })
                        }}
                    </div>
                    {move || {
                        book.with(|b| {
                            b.summary
                                .clone()
                                .map(|s| view! { <p class="book-summary">{s}</p> })
                        })
                    }}
                    <div class="book-detail-actions">
                        <button class="btn" on:click=read_online>"Read Online"</button>
                        <button class="btn btn-secondary" on:click=download>"Download"</button>
                        <button
                            class=move || {
                                if is_favorite.get() {
                                    "btn btn-secondary favorite-active"
                                } else {
                                    "btn btn-secondary"
                                }
                            }
                            on:click=move |_| {
                                on_toggle_favorite.run(book.with_untracked(|b| b.id.clone()))
                            }
                        >
                            {move || {
                                if is_favorite.get() {
                                    "♥ Remove Favorite"
                                } else {
                                    "♡ Add Favorite"
                                }
                            }}
                        </button>
                    </div>
                    <Show when=move || !by_author.get().is_empty()>
                        <div class="by-author">
                            <h4>
                                "More by " {move || book.with(|b| b.author.clone())}
                            </h4>
                            <ul>
                                {move || {
                                    by_author
                                        .get()
                                        .into_iter()
                                        .map(|b| view! { <li>{b.title}</li> })
                                        .collect_view()
                                }}
                            </ul>
                        </div>
                    </Show>
                </div>
            </div>
        </Modal>
    }
}
