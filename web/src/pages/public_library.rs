//! Public library: every public book, with in-place rating, optimistic
//! favorite toggles and an add-to-library shortcut.

use leptos::prelude::*;

use shared::dto::books::BookSummary;
use shared::dto::live::{RATING_UPDATED, READERS_COUNT_UPDATED};
use shared::utils::apply_book_update;

use crate::components::{BookCard, BookDetailModal, DashboardLayout, SkeletonGrid};
use crate::services::api;
use crate::state::live::use_live_context;
use crate::state::session::use_session_context;
use crate::utils::optimistic::optimistic_signal;

#[component]
pub fn PublicLibraryPage() -> impl IntoView {
    let session = use_session_context();
    let books = RwSignal::new(Vec::<BookSummary>::new());
    let favorite_ids = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(true);
    let selected = RwSignal::new(None::<BookSummary>);
    let (notice, set_notice) = signal(None::<String>);

    leptos::task::spawn_local(async move {
        match api::books::list_public().await {
            Ok(list) => books.set(list),
            Err(err) => log::warn!("Failed to load public books: {err}"),
        }
        loading.set(false);
    });
    // Favorites need a session; anonymous visitors just browse.
    if session.is_authenticated() {
        leptos::task::spawn_local(async move {
            match api::favorites::list(None).await {
                Ok(list) => favorite_ids.set(list.into_iter().map(|b| b.id).collect()),
                Err(err) => log::warn!("Failed to load favorites: {err}"),
            }
        });
    }

    let apply_update = move |book: &BookSummary| {
        books.update(|list| {
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

    let toggle_favorite = Callback::new(move |id: String| {
        let currently = favorite_ids.with_untracked(|l| l.contains(&id));
        leptos::task::spawn_local(async move {
            let result = if currently {
                let removed = id.clone();
                optimistic_signal(
                    favorite_ids,
                    move |list| list.retain(|fav| fav != &removed),
                    api::favorites::remove(&id),
                )
                .await
            } else {
                let added = id.clone();
                optimistic_signal(
                    favorite_ids,
                    move |list| list.push(added),
                    api::favorites::add(&id),
                )
                .await
            };
            if let Err(err) = result {
                log::warn!("Favorite toggle failed: {err}");
            }
        });
    });

    let add_to_library = move |id: String, title: String| {
        leptos::task::spawn_local(async move {
            match api::collections::add_from_public(&id).await {
                Ok(()) => set_notice.set(Some(format!("Added \"{title}\" to your library"))),
                Err(err) => set_notice.set(Some(err.to_string())),
            }
        });
    };

    let on_select = Callback::new(move |book: BookSummary| selected.set(Some(book)));

    let on_rate = Callback::new(move |stars: u8| {
        let Some(id) = selected.with_untracked(|s| s.as_ref().map(|b| b.id.clone())) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::books::rate(&id, stars).await {
                Ok(updated) => apply_update(&updated),
                Err(err) => log::warn!("Rating failed: {err}"),
            }
        });
    });

    view! {
        <DashboardLayout>
            <h1>"Public Library"</h1>
            {move || notice.get().map(|n| view! { <p class="notice">{n}</p> })}
            <Show when=move || !loading.get() fallback=|| view! { <SkeletonGrid count=8/> }>
                <div class="book-grid">
                    {move || {
                        books
                            .get()
                            .into_iter()
                            .map(|book| {
                                let id = book.id.clone();
                                let add_id = book.id.clone();
                                let add_title = book.title.clone();
                                view! {
                                    <div class="library-entry">
                                        <BookCard
                                            book=book
                                            is_favorite=Signal::derive(move || {
                                                favorite_ids.with(|l| l.contains(&id))
                                            })
                                            on_toggle_favorite=toggle_favorite
                                            on_select=on_select
                                        />
                                        <button
                                            class="btn-link"
                                            on:click=move |_| add_to_library(
                                                add_id.clone(),
                                                add_title.clone(),
                                            )
                                        >
                                            "+ Add to My Library"
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
            {move || {
                selected.get().map(|snapshot| {
                    let modal_id = snapshot.id.clone();
                    let favorite_id = snapshot.id.clone();
                    let book = Signal::derive(move || {
                        books
                            .with(|l| l.iter().find(|b| b.id == modal_id).cloned())
                            .unwrap_or_else(|| snapshot.clone())
                    });
                    view! {
                        <BookDetailModal
                            book=book
                            is_favorite=Signal::derive(move || {
                                favorite_ids.with(|l| l.contains(&favorite_id))
                            })
                            on_toggle_favorite=toggle_favorite
                            on_rate=Some(on_rate)
                            on_close=Callback::new(move |()| selected.set(None))
                        />
                    }
                })
            }}
        </DashboardLayout>
    }
}
