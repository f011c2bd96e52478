//! Personal library: the user's own uploads, with filtering, sorting,
//! multipart upload, publish and delete, plus named collections.

use leptos::prelude::*;

use shared::dto::books::{BookSummary, Collection};

use crate::components::{DashboardLayout, SkeletonGrid, ToggleSwitch};
use crate::services::api;
use crate::utils::format::format_date;
use crate::utils::media::cover_url;

#[component]
pub fn PersonalLibraryPage() -> impl IntoView {
    let books = RwSignal::new(Vec::<BookSummary>::new());
    let collections = RwSignal::new(Vec::<Collection>::new());
    let loading = RwSignal::new(true);
    let filter_by = RwSignal::new(String::new());
    let sort_by = RwSignal::new("newest".to_string());
    let (error, set_error) = signal(None::<String>);

    let load_books = move || {
        leptos::task::spawn_local(async move {
            let filter = filter_by.get_untracked();
            let sort = sort_by.get_untracked();
            match api::books::list_personal(&filter, &sort).await {
                Ok(list) => books.set(list),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    };
    let load_collections = move || {
        leptos::task::spawn_local(async move {
            match api::collections::list().await {
                Ok(list) => collections.set(list),
                Err(err) => log::warn!("Failed to load collections: {err}"),
            }
        });
    };
    load_books();
    load_collections();

    let set_filter = move |value: &str| {
        filter_by.set(value.to_string());
        load_books();
    };

    let publish = move |id: String| {
        leptos::task::spawn_local(async move {
            match api::books::publish(&id).await {
                Ok(()) => load_books(),
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    let delete = move |id: String| {
        leptos::task::spawn_local(async move {
            match api::books::delete_personal(&id).await {
                Ok(()) => load_books(),
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <DashboardLayout>
            <h1>"My Library"</h1>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

            <div class="library-toolbar">
                <div class="filter-group">
                    {[("", "All"), ("today", "Today"), ("thisWeek", "This Week"),
                      ("thisMonth", "This Month")]
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <button
                                    class=move || {
                                        if filter_by.get() == value {
                                            "btn btn-small btn-active"
                                        } else {
                                            "btn btn-small"
                                        }
                                    }
                                    on:click=move |_| set_filter(value)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <select
                    on:change=move |ev| {
                        sort_by.set(event_target_value(&ev));
                        load_books();
                    }
                >
                    <option value="newest">"Newest first"</option>
                    <option value="rating">"Highest rated"</option>
                </select>
            </div>

            <Show when=move || !loading.get() fallback=|| view! { <SkeletonGrid count=4/> }>
                <div class="book-grid">
                    {move || {
                        books
                            .get()
                            .into_iter()
                            .map(|book| {
                                let publish_id = book.id.clone();
                                let delete_id = book.id.clone();
                                let cover = cover_url(book.cover_image_url.as_deref(), &book.title);
                                view! {
                                    <div class="book-card personal-book">
                                        <img class="book-cover" src=cover alt=book.title.clone()/>
                                        <h3 class="book-title">{book.title.clone()}</h3>
                                        <p class="book-author">{book.author.clone()}</p>
                                        {book
                                            .created_at
                                            .as_deref()
                                            .map(|ts| view! {
                                                <p class="book-date">{format_date(ts)}</p>
                                            })}
                                        <div class="book-actions">
                                            <Show when={
                                                let published = book.is_public;
                                                move || !published
                                            }>
                                                <button
                                                    class="btn-link"
                                                    on:click={
                                                        let id = publish_id.clone();
                                                        move |_| publish(id.clone())
                                                    }
                                                >
                                                    "Publish"
                                                </button>
                                            </Show>
                                            <button
                                                class="btn-link btn-danger"
                                                on:click={
                                                    let id = delete_id.clone();
                                                    move |_| delete(id.clone())
                                                }
                                            >
                                                "Delete"
                                            </button>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>

            <UploadForm on_uploaded=Callback::new(move |()| load_books())/>
            <CollectionsPanel collections=collections on_changed=Callback::new(move |()| {
                load_collections()
            })/>
        </DashboardLayout>
    }
}

/// Multipart upload form for a new personal book.
#[component]
fn UploadForm(on_uploaded: Callback<()>) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (author, set_author) = signal(String::new());
    let (genre, set_genre) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let is_public = RwSignal::new(false);
    let (error, set_error) = signal(None::<String>);
    let cover_input: NodeRef<leptos::html::Input> = NodeRef::new();
    let pdf_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get_untracked();
        if title_value.trim().is_empty() {
            set_error.set(Some("Title is required".to_string()));
            return;
        }
        let form = match web_sys::FormData::new() {
            Ok(form) => form,
            Err(err) => {
                log::error!("Failed to build form data: {err:?}");
                return;
            }
        };
        let append = |key: &str, value: &str| {
            if let Err(err) = form.append_with_str(key, value) {
                log::error!("Failed to append {key}: {err:?}");
            }
        };
        append("title", title_value.trim());
        append("author", author.get_untracked().trim());
        append("genre", genre.get_untracked().trim());
        append("description", description.get_untracked().trim());
        append(
            "isPublic",
            if is_public.get_untracked() { "true" } else { "false" },
        );
        let file_of = |input: NodeRef<leptos::html::Input>| {
            input
                .get_untracked()
                .and_then(|el| el.files())
                .and_then(|list| list.get(0))
        };
        if let Some(file) = file_of(pdf_input) {
            if let Err(err) = form.append_with_blob("bookPdf", &file) {
                log::error!("Failed to attach book file: {err:?}");
            }
        }
        if let Some(file) = file_of(cover_input) {
            if let Err(err) = form.append_with_blob("coverImage", &file) {
                log::error!("Failed to attach cover: {err:?}");
            }
        }
        set_error.set(None);
        leptos::task::spawn_local(async move {
            match api::books::create_personal(form).await {
                Ok(()) => {
                    set_title.set(String::new());
                    set_author.set(String::new());
                    set_genre.set(String::new());
                    set_description.set(String::new());
                    is_public.set(false);
                    on_uploaded.run(());
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <section class="upload-form card">
            <h2>"Add a Book"</h2>
            <form on:submit=submit>
                <input
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Author"
                    prop:value=move || author.get()
                    on:input=move |ev| set_author.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Genres (comma separated)"
                    prop:value=move || genre.get()
                    on:input=move |ev| set_genre.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
                <label>"Book file (PDF)"</label>
                <input type="file" accept="application/pdf" node_ref=pdf_input/>
                <label>"Cover image"</label>
                <input type="file" accept="image/*" node_ref=cover_input/>
                <ToggleSwitch
                    label="Make public immediately"
                    checked=is_public
                    on_toggle=Callback::new(move |value| is_public.set(value))
                />
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                <button class="btn" type="submit">"Upload"</button>
            </form>
        </section>
    }
}

/// Named collections sidebar: list existing collections and create new ones.
#[component]
fn CollectionsPanel(
    collections: RwSignal<Vec<Collection>>,
    on_changed: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = name.get_untracked().trim().to_string();
        if value.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            match api::collections::create(&value).await {
                Ok(_) => {
                    set_name.set(String::new());
                    set_error.set(None);
                    on_changed.run(());
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <section class="collections card">
            <h2>"Collections"</h2>
            <ul>
                {move || {
                    collections
                        .get()
                        .into_iter()
                        .map(|c| {
                            let count = c.books.len();
                            view! {
                                <li>
                                    <span>{c.name}</span>
                                    <span class="collection-count">
                                        {format!("{count} books")}
                                    </span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <form on:submit=submit>
                <input
                    type="text"
                    placeholder="New collection name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <button class="btn btn-small" type="submit">"Create"</button>
            </form>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
        </section>
    }
}
