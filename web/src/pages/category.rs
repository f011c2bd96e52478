//! Category page: public books in one genre, from the route parameter.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use shared::dto::books::BookSummary;

use crate::components::{BookCard, DashboardLayout, SkeletonGrid};
use crate::services::api;
use crate::utils::optimistic::optimistic_signal;

#[component]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();
    let name = Signal::derive(move || {
        params.with(|p| p.get("name").unwrap_or_default())
    });
    let books = RwSignal::new(Vec::<BookSummary>::new());
    let favorite_ids = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(true);
    let navigate = use_navigate();

    Effect::new(move || {
        let genre = name.get();
        if genre.is_empty() {
            return;
        }
        loading.set(true);
        leptos::task::spawn_local(async move {
            match api::books::by_genre(&genre).await {
                Ok(list) => books.set(list),
                Err(err) => log::warn!("Failed to load category: {err}"),
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
            <h1>{move || name.get()}</h1>
            <Show when=move || !loading.get() fallback=|| view! { <SkeletonGrid count=4/> }>
                <Show
                    when=move || !books.get().is_empty()
                    fallback=move || {
                        view! {
                            <p class="empty-state">
                                {move || format!("No books in {} yet.", name.get())}
                            </p>
                        }
                    }
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
