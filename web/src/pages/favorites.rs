//! Favorites page. Removal is optimistic: the card disappears at once and
//! comes back in its original position if the request fails.

use leptos::prelude::*;

use shared::dto::books::BookSummary;
use shared::dto::live::{RATING_UPDATED, READERS_COUNT_UPDATED};
use shared::utils::apply_book_update;

use crate::components::{BookCard, BookDetailModal, DashboardLayout, SkeletonGrid};
use crate::services::api;
use crate::state::live::use_live_context;
use crate::utils::optimistic::optimistic_signal;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let favorites = RwSignal::new(Vec::<BookSummary>::new());
    let loading = RwSignal::new(true);
    let selected = RwSignal::new(None::<BookSummary>);

    leptos::task::spawn_local(async move {
        match api::favorites::list(None).await {
            Ok(list) => favorites.set(list),
            Err(err) => log::warn!("Failed to load favorites: {err}"),
        }
        loading.set(false);
    });

    let apply_update = move |book: &BookSummary| {
        favorites.update(|list| {
            apply_book_update(list, book);
        });
    };
    let live = use_live_context();
    let rating_sub = live.subscribe(RATING_UPDATED, apply_update);
    let readers_sub = live.subscribe(READERS_COUNT_UPDATED, apply_update);
    on_cleanup(move || {
        drop(rating_sub);
        drop(readers_sub);
    });

    // On this page the heart always removes.
    let remove_favorite = Callback::new(move |id: String| {
        leptos::task::spawn_local(async move {
            let removed = id.clone();
            let result = optimistic_signal(
                favorites,
                move |list| list.retain(|b| b.id != removed),
                api::favorites::remove(&id),
            )
            .await;
            if let Err(err) = result {
                log::warn!("Failed to remove favorite: {err}");
            }
        });
    });

    let on_select = Callback::new(move |book: BookSummary| selected.set(Some(book)));

    view! {
        <DashboardLayout>
            <h1>"Your Favorites"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <SkeletonGrid count=4/> }>
                <Show
                    when=move || !favorites.get().is_empty()
                    fallback=|| view! {
                        <p class="empty-state">"No favorites yet. Browse the public library!"</p>
                    }
                >
                    <div class="book-grid">
                        {move || {
                            favorites
                                .get()
                                .into_iter()
                                .map(|book| {
                                    view! {
                                        <BookCard
                                            book=book
                                            is_favorite=Signal::derive(|| true)
                                            on_toggle_favorite=remove_favorite
                                            on_select=on_select
                                        />
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </Show>
            {move || {
                selected.get().map(|snapshot| {
                    let modal_id = snapshot.id.clone();
                    let book = Signal::derive(move || {
                        favorites
                            .with(|l| l.iter().find(|b| b.id == modal_id).cloned())
                            .unwrap_or_else(|| snapshot.clone())
                    });
                    view! {
                        <BookDetailModal
                            book=book
                            is_favorite=Signal::derive(|| true)
                            on_toggle_favorite=remove_favorite
                            on_close=Callback::new(move |()| selected.set(None))
                        />
                    }
                })
            }}
        </DashboardLayout>
    }
}
