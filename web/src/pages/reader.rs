//! In-browser reader. Loads the book, records a reading-history entry and
//! embeds the PDF.
//!
//! The history append is fire-and-forget: failing to record a read never
//! blocks reading.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use shared::dto::books::BookSummary;

use crate::components::{DashboardLayout, Spinner};
use crate::services::api;
use crate::utils::media::resolve_media_url;

#[component]
pub fn ReaderPage() -> impl IntoView {
    let params = use_params_map();
    let book = RwSignal::new(None::<BookSummary>);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move || {
        let Some(id) = params.with(|p| p.get("book_id")) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::books::fetch(&id).await {
                Ok(loaded) => {
                    book.set(Some(loaded));
                    if let Err(err) = api::history::append(&id).await {
                        log::warn!("Failed to record reading history: {err}");
                    }
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    });

    view! {
        <DashboardLayout>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            {move || match book.get() {
                None => view! { <Spinner/> }.into_any(),
                Some(book) => {
                    let pdf = book.file_path.as_deref().map(resolve_media_url);
                    view! {
                        <div class="reader">
                            <div class="reader-header">
                                <A href="/home">"← Back"</A>
                                <h1>{book.title.clone()}</h1>
                                <p class="book-author">{book.author.clone()}</p>
                            </div>
                            {match pdf {
                                Some(url) => view! {
                                    <iframe class="reader-frame" src=url title=book.title></iframe>
                                }
                                .into_any(),
                                None => view! {
                                    <p class="empty-state">
                                        "This book has no readable file attached."
                                    </p>
                                }
                                .into_any(),
                            }}
                        </div>
                    }
                    .into_any()
                }
            }}
        </DashboardLayout>
    }
}
