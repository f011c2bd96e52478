//! Registration page.
//!
//! A successful registration never signs the user in; it routes to the
//! login page so the only path into a session is an explicit login.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session_context;

const MIN_PASSWORD_LEN: usize = 6;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get_untracked().trim().to_string();
        let email = email.get_untracked().trim().to_string();
        let password = password.get_untracked();
        if username.is_empty() || email.is_empty() {
            set_error.set(Some("Username and email are required".to_string()));
            return;
        }
        if password.len() < MIN_PASSWORD_LEN {
            set_error.set(Some(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
            return;
        }
        if password != confirm.get_untracked() {
            set_error.set(Some("Passwords do not match".to_string()));
            return;
        }
        set_error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.register(username, email, password).await {
                Ok(()) => navigate("/login", Default::default()),
                Err(err) => set_error.set(Some(err)),
            }
        });
    };

    view! {
        <div class="page-centered">
            <div class="card auth-card">
                <h1>"Join Bookhaven"</h1>
                <p class="auth-subtitle">"Create an account to start reading"</p>
                <form on:submit=submit>
                    <label>"Username"</label>
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
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
                    <label>"Confirm password"</label>
                    <input
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    />
                    {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                    <button class="btn" type="submit" disabled=move || session.loading.get()>
                        "Create Account"
                    </button>
                </form>
                <p class="auth-switch">
                    "Already registered? " <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
