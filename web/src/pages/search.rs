//! Search results page, driven by the `q` query parameter.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use shared::dto::books::BookSummary;

use crate::components::{BookCard, DashboardLayout, SkeletonGrid};
use crate::services::api;
use crate::utils::optimistic::optimistic_signal;

#[component]
pub fn SearchPage() -> impl IntoView {
    let query_map = use_query_map();
    let query = Signal::derive(move || {
        query_map.with(|q| q.get("q").unwrap_or_default())
    });
    let results = RwSignal::new(Vec::<BookSummary>::new());
    let favorite_ids = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(false);
    let navigate = use_navigate();

    // Refetch whenever the query parameter changes, including in-app
    // navigations from the search box.
    Effect::new(move || {
        let q = query.get();
        if q.trim().is_empty() {
            results.set(Vec::new());
            return;
        }
        loading.set(true);
        leptos::task::spawn_local(async move {
            match api::books::search(q.trim()).await {
                Ok(books) => results.set(books),
                Err(err) => log::warn!("Search failed: {err}"),
            }
            loading.set(false);
        });
    });
    leptos::task::spawn_local(async move {
        match api::favorites::list(None).await {
            Ok(list) => favorite_ids.set(list.into_iter().map(|b| b.id).collect()),
            Err(err) => log::warn!("Failed to load favorites: {err}"),
        }
    });

    let toggle_favorite = Callback::new(move |id: String| {
        let currently = favorite_ids.with_untracked(|l| l.contains(&id));
        leptos::task::spawn_local(async move {
            let changed = id.clone();
            let result = if currently {
                optimistic_signal(
                    favorite_ids,
                    move |list| list.retain(|fav| fav != &changed),
                    api::favorites::remove(&id),
                )
                .await
            } else {
                optimistic_signal(
                    favorite_ids,
                    move |list| list.push(changed),
                    api::favorites::add(&id),
                )
                .await
            };
            if let Err(err) = result {
                log::warn!("Favorite toggle failed: {err}");
            }
        });
    });

    let on_select = Callback::new(move |book: BookSummary| {
        navigate(&format!("/reader/{}", book.id), Default::default());
    });

    view! {
        <DashboardLayout>
            <h1>
                {move || {
                    let q = query.get();
                    if q.is_empty() {
                        "Search".to_string()
                    } else {
                        format!("Results for \"{q}\"")
                    }
                }}
            </h1>
            <Show when=move || !loading.get() fallback=|| view! { <SkeletonGrid count=4/> }>
                <Show
                    when=move || !results.get().is_empty()
                    fallback=move || {
                        view! {
                            <p class="empty-state">
                                {move || {
                                    if query.get().is_empty() {
                                        "Type something in the search box above."
                                    } else {
                                        "No books matched your search."
                                    }
                                }}
                            </p>
                        }
                    }
                >
                    <div class="book-grid">
                        {move || {
                            results
                                .get()
                                .into_iter()
                                .map(|book| {
                                    let id = book.id.clone();
                                    view! {
                                        <BookCard
                                            book=book
                                            is_favorite=Signal::derive(move || {
                                                favorite_ids.with(|l| l.contains(&id))
                                            })
                                            on_toggle_favorite=toggle_favorite
                                            on_select=on_select
                                        />
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </Show>
        </DashboardLayout>
    }
}
