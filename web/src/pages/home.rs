//! Signed-in dashboard: trending, newly added, reading history and
//! favorites shelves, kept fresh by the live-update channel.
//!
//! Every shelf owns an independent copy of its books. Live updates are
//! applied to whichever copies currently hold the updated id; favorite
//! toggles are optimistic and revert on failure.

use leptos::prelude::*;

use shared::dto::books::{BookSummary, HistoryEntry};
use shared::dto::live::{RATING_UPDATED, READERS_COUNT_UPDATED};
use shared::utils::{apply_book_update, apply_history_update};

use crate::components::{BookCard, BookDetailModal, DashboardLayout, SkeletonGrid};
use crate::services::api;
use crate::state::live::use_live_context;
use crate::utils::format::format_date;
use crate::utils::optimistic::optimistic_signal;

const SHELF_LIMIT: u32 = 4;

#[component]
pub fn HomePage() -> impl IntoView {
    let trending = RwSignal::new(Vec::<BookSummary>::new());
    let newly_added = RwSignal::new(Vec::<BookSummary>::new());
    let history = RwSignal::new(Vec::<HistoryEntry>::new());
    let favorites = RwSignal::new(Vec::<BookSummary>::new());
    let loading = RwSignal::new(true);
    let selected = RwSignal::new(None::<BookSummary>);

    let load_trending = move |expanded: bool| {
        leptos::task::spawn_local(async move {
            let limit = (!expanded).then_some(SHELF_LIMIT);
            match api::books::trending(limit).await {
                Ok(books) => trending.set(books),
                Err(err) => log::warn!("Failed to load trending books: {err}"),
            }
        });
    };
    let load_newly_added = move |expanded: bool| {
        leptos::task::spawn_local(async move {
            let limit = (!expanded).then_some(SHELF_LIMIT);
            match api::books::list_public_sorted("createdAt", limit).await {
                Ok(response) => newly_added.set(response.books),
                Err(err) => log::warn!("Failed to load newly added books: {err}"),
            }
        });
    };
    let load_history = move |expanded: bool| {
        leptos::task::spawn_local(async move {
            let limit = (!expanded).then_some(SHELF_LIMIT);
            match api::history::list(limit).await {
                Ok(entries) => history.set(entries),
                Err(err) => log::warn!("Failed to load reading history: {err}"),
            }
        });
    };
    let load_favorites = move |expanded: bool| {
        leptos::task::spawn_local(async move {
            let limit = (!expanded).then_some(SHELF_LIMIT);
            match api::favorites::list(limit).await {
                Ok(books) => favorites.set(books),
                Err(err) => log::warn!("Failed to load favorites: {err}"),
            }
            loading.set(false);
        });
    };

    load_trending(false);
    load_newly_added(false);
    load_history(false);
    load_favorites(false);

    // Apply a broadcast replacement to every copy this page holds.
    let apply_update = move |book: &BookSummary| {
        trending.update(|list| {
            apply_book_update(list, book);
        });
        newly_added.update(|list| {
            apply_book_update(list, book);
        });
        favorites.update(|list| {
            apply_book_update(list, book);
        });
        history.update(|list| {
            apply_history_update(list, book);
        });
    };
    let live = use_live_context();
    let rating_sub = live.subscribe(RATING_UPDATED, apply_update);
    let readers_sub = live.subscribe(READERS_COUNT_UPDATED, apply_update);
    on_cleanup(move || {
        drop(rating_sub);
        drop(readers_sub);
    });

    let find_book = move |id: &str| -> Option<BookSummary> {
        trending
            .with_untracked(|l| l.iter().find(|b| b.id == id).cloned())
            .or_else(|| newly_added.with_untracked(|l| l.iter().find(|b| b.id == id).cloned()))
            .or_else(|| favorites.with_untracked(|l| l.iter().find(|b| b.id == id).cloned()))
            .or_else(|| {
                history.with_untracked(|l| {
                    l.iter()
                        .filter_map(|e| e.book.as_ref())
                        .find(|b| b.id == id)
                        .cloned()
                })
            })
    };

    let toggle_favorite = Callback::new(move |id: String| {
        let currently = favorites.with_untracked(|l| l.iter().any(|b| b.id == id));
        leptos::task::spawn_local(async move {
            let result = if currently {
                let remove_id = id.clone();
                optimistic_signal(
                    favorites,
                    move |list| list.retain(|b| b.id != remove_id),
                    api::favorites::remove(&id),
                )
                .await
            } else if let Some(book) = find_book(&id) {
                optimistic_signal(
                    favorites,
                    move |list| list.push(book),
                    api::favorites::add(&id),
                )
                .await
            } else {
                Ok(())
            };
            if let Err(err) = result {
                log::warn!("Favorite toggle failed: {err}");
            }
        });
    });

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

    let is_loading = Signal::derive(move || loading.get());

    view! {
        <DashboardLayout>
            <BookShelf
                title="Trending Now"
                books=Signal::derive(move || trending.get())
                loading=is_loading
                favorites=favorites
                on_toggle_favorite=toggle_favorite
                on_select=on_select
                on_expand=Callback::new(load_trending)
            />
            <BookShelf
                title="Newly Added"
                books=Signal::derive(move || newly_added.get())
                loading=is_loading
                favorites=favorites
                on_toggle_favorite=toggle_favorite
                on_select=on_select
                on_expand=Callback::new(load_newly_added)
            />
            <HistoryShelf
                history=history
                favorites=favorites
                on_toggle_favorite=toggle_favorite
                on_select=on_select
                on_expand=Callback::new(load_history)
            />
            <BookShelf
                title="Your Favorites"
                books=Signal::derive(move || favorites.get())
                loading=is_loading
                favorites=favorites
                on_toggle_favorite=toggle_favorite
                on_select=on_select
                on_expand=Callback::new(load_favorites)
            />
            {move || {
                selected.get().map(|snapshot| {
                    let modal_id = snapshot.id.clone();
                    let favorite_id = snapshot.id.clone();
                    let book = Signal::derive(move || {
                        trending
                            .with(|l| l.iter().find(|b| b.id == modal_id).cloned())
                            .or_else(|| {
                                newly_added.with(|l| l.iter().find(|b| b.id == modal_id).cloned())
                            })
                            .or_else(|| {
                                favorites.with(|l| l.iter().find(|b| b.id == modal_id).cloned())
                            })
                            .unwrap_or_else(|| snapshot.clone())
                    });
                    view! {
                        <BookDetailModal
                            book=book
                            is_favorite=Signal::derive(move || {
                                favorites.with(|l| l.iter().any(|b| b.id == favorite_id))
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

/// One titled shelf with a view-all toggle. Collapsed shelves show at most
/// [`SHELF_LIMIT`] books; expanding refetches without a limit.
#[component]
fn BookShelf(
    title: &'static str,
    #[prop(into)] books: Signal<Vec<BookSummary>>,
    #[prop(into)] loading: Signal<bool>,
    favorites: RwSignal<Vec<BookSummary>>,
    on_toggle_favorite: Callback<String>,
    on_select: Callback<BookSummary>,
    /// Called with the new expanded state so the caller can refetch.
    on_expand: Callback<bool>,
) -> impl IntoView {
    let expanded = RwSignal::new(false);

    view! {
        <section class="shelf">
            <div class="shelf-header">
                <h2>{title}</h2>
                <button
                    class="btn-link"
                    on:click=move |_| {
                        let next = !expanded.get_untracked();
                        expanded.set(next);
                        on_expand.run(next);
                    }
                >
                    {move || if expanded.get() { "Show less" } else { "View all" }}
                </button>
            </div>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <SkeletonGrid count=SHELF_LIMIT as usize/> }
            >
                <div class="book-grid">
                    {move || {
                        books
                            .get()
                            .into_iter()
                            .map(|book| {
                                let id = book.id.clone();
                                view! {
                                    <BookCard
                                        book=book
                                        is_favorite=Signal::derive(move || {
                                            favorites.with(|l| l.iter().any(|b| b.id == id))
                                        })
                                        on_toggle_favorite=on_toggle_favorite
                                        on_select=on_select
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </section>
    }
}

/// Reading-history shelf. Entries whose book was deleted are skipped.
#[component]
fn HistoryShelf(
    history: RwSignal<Vec<HistoryEntry>>,
    favorites: RwSignal<Vec<BookSummary>>,
    on_toggle_favorite: Callback<String>,
    on_select: Callback<BookSummary>,
    on_expand: Callback<bool>,
) -> impl IntoView {
    let expanded = RwSignal::new(false);

    view! {
        <section class="shelf">
            <div class="shelf-header">
                <h2>"Continue Reading"</h2>
                <button
                    class="btn-link"
                    on:click=move |_| {
                        let next = !expanded.get_untracked();
                        expanded.set(next);
                        on_expand.run(next);
                    }
                >
                    {move || if expanded.get() { "Show less" } else { "View all" }}
                </button>
            </div>
            <div class="book-grid">
                {move || {
                    history
                        .get()
                        .into_iter()
                        .filter_map(|entry| {
                            let book = entry.book?;
                            let id = book.id.clone();
                            let caption = entry
                                .last_read_at
                                .map(|ts| format!("Last read {}", format_date(&ts)));
                            Some(view! {
                                <div class="history-entry">
                                    <BookCard
                                        book=book
                                        is_favorite=Signal::derive(move || {
                                            favorites.with(|l| l.iter().any(|b| b.id == id))
                                        })
                                        on_toggle_favorite=on_toggle_favorite
                                        on_select=on_select
                                    />
                                    {caption.map(|c| view! { <p class="history-caption">{c}</p> })}
                                </div>
                            })
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
