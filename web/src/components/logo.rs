//! Brand mark shown in the navbar.

use leptos::prelude::*;

#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <span class="logo-mark">"📚"</span>
        <span class="logo-text">"Bookhaven"</span>
    }
}
