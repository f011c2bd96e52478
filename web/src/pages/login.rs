//! Login page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        let email = email.get_untracked();
        let password = password.get_untracked();
        if email.trim().is_empty() || password.is_empty() {
            set_error.set(Some("Email and password are required".to_string()));
            return;
        }
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.login(email, password).await {
                Ok(()) => navigate("/home", Default::default()),
                Err(err) => set_error.set(Some(err)),
            }
        });
    };

    view! {
        <div class="page-centered">
            <div class="card auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-subtitle">"Sign in to keep reading"</p>
                <form on:submit=submit>
                    <label>"Email"</label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <label>"Password"</label>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                    <button class="btn" type="submit" disabled=move || session.loading.get()>
                        {move || if session.loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "No account yet? " <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
}
