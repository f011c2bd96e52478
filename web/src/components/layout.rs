//! Dashboard chrome: top navigation bar with search, category menu and the
//! user menu, wrapped around every signed-in page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::Logo;
use crate::state::session::use_session_context;

const CATEGORIES: &[&str] = &[
    "Fiction",
    "Non-Fiction",
    "Science",
    "History",
    "Fantasy",
    "Romance",
    "Mystery",
    "Biography",
];

#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();
    let (query, set_query) = signal(String::new());

    let submit_search = {
        let navigate = navigate.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let q = query.get_untracked();
            if !q.trim().is_empty() {
                navigate(
                    &format!("/search?q={}", urlencoding::encode(q.trim())),
                    Default::default(),
                );
            }
        }
    };

    let pick_category = move |ev: web_sys::Event| {
        let name = event_target_value(&ev);
        if !name.is_empty() {
            navigate(
                &format!("/category/{}", urlencoding::encode(&name)),
                Default::default(),
            );
        }
    };

    view! {
        <nav class="navbar">
            <A href="/home" attr:class="nav-logo">
                <Logo/>
            </A>
            <form class="nav-search" on:submit=submit_search>
                <input
                    type="text"
                    placeholder="Search books or authors..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
            </form>
            <select class="nav-categories" on:change=pick_category>
                <option value="">"Categories"</option>
                {CATEGORIES
                    .iter()
                    .map(|c| view! { <option value=*c>{*c}</option> })
                    .collect_view()}
            </select>
            <div class="nav-links">
                <A href="/home">"Home"</A>
                <A href="/public-library">"Public Library"</A>
                <A href="/personal-library">"My Library"</A>
                <A href="/favorites">"Favorites"</A>
                <A href="/recommendations">"Recommendations"</A>
            </div>
            <div class="nav-user">
                <span class="nav-username">
                    {move || session.username().unwrap_or_default()}
                </span>
                <A href="/settings">"Settings"</A>
                <button class="btn-link" on:click=move |_| session.logout()>
                    "Logout"
                </button>
            </div>
        </nav>
        <main class="dashboard-main">{children()}</main>
    }
}
