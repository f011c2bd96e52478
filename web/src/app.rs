//! Bookhaven application root
//!
//! Provides the session and live-update contexts, then mounts the router.
//! Protected routes are gated by [`RequireAuth`], which redirects to the
//! login page whenever no session is present.

use leptos::prelude::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes, A},
    path,
};

use crate::pages::{
    CategoryPage, FavoritesPage, HomePage, LoginPage, PersonalLibraryPage, PublicLibraryPage,
    ReaderPage, RecommendationsPage, RegisterPage, SearchPage, SettingsPage,
};
use crate::state::live::provide_live_context;
use crate::state::session::{provide_session_context, use_session_context};

#[component]
pub fn App() -> impl IntoView {
    provide_session_context();
    provide_live_context();

    view! {
        <Router>
            <div class="app-container">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=RootRedirect/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/register") view=RegisterPage/>
                    <Route path=path!("/public-library") view=PublicLibraryPage/>
                    <Route
                        path=path!("/home")
                        view=|| view! { <RequireAuth><HomePage/></RequireAuth> }
                    />
                    <Route
                        path=path!("/personal-library")
                        view=|| view! { <RequireAuth><PersonalLibraryPage/></RequireAuth> }
                    />
                    <Route
                        path=path!("/favorites")
                        view=|| view! { <RequireAuth><FavoritesPage/></RequireAuth> }
                    />
                    <Route
                        path=path!("/recommendations")
                        view=|| view! { <RequireAuth><RecommendationsPage/></RequireAuth> }
                    />
                    <Route
                        path=path!("/search")
                        view=|| view! { <RequireAuth><SearchPage/></RequireAuth> }
                    />
                    <Route
                        path=path!("/category/:name")
                        view=|| view! { <RequireAuth><CategoryPage/></RequireAuth> }
                    />
                    <Route
                        path=path!("/settings")
                        view=|| view! { <RequireAuth><SettingsPage/></RequireAuth> }
                    />
                    <Route
                        path=path!("/reader/:book_id")
                        view=|| view! { <RequireAuth><ReaderPage/></RequireAuth> }
                    />
                </Routes>
                <footer class="app-footer">
                    <span>"© 2025 Bookhaven"</span>
                </footer>
            </div>
        </Router>
    }
}

/// Gate for authenticated routes. Renders its children only while a session
/// exists; otherwise redirects to the login page.
#[component]
fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session_context();
    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <Redirect path="/login"/> }
        >
            {children()}
        </Show>
    }
}

/// The bare origin lands on the dashboard when signed in, otherwise on the
/// login page.
#[component]
fn RootRedirect() -> impl IntoView {
    let session = use_session_context();
    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <Redirect path="/login"/> }
        >
            <Redirect path="/home"/>
        </Show>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page-centered">
            <div class="card not-found-card">
                <h1>"404 - Page Not Found"</h1>
                <p>"The page you are looking for does not exist."</p>
                <A href="/">
                    <span class="btn">"Back to Bookhaven"</span>
                </A>
            </div>
        </div>
    }
}
