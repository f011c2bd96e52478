//! Profile edit dialog.
//!
//! City and country are forwarded to the backend but never stored in the
//! session; only username and email are part of the signed-in identity.

use leptos::prelude::*;

use shared::dto::auth::ProfileUpdateRequest;

use crate::components::Modal;
use crate::state::session::use_session_context;

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[component]
pub fn EditProfileModal(on_close: Callback<()>) -> impl IntoView {
    let session = use_session_context();
    let (username, set_username) =
        signal(session.username().unwrap_or_default());
    let (email, set_email) = signal(
        session
            .session
            .with_untracked(|s| s.as_ref().map(|s| s.email.clone()))
            .unwrap_or_default(),
    );
    let (city, set_city) = signal(String::new());
    let (country, set_country) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        let update = ProfileUpdateRequest {
            username: non_empty(username.get_untracked()),
            email: non_empty(email.get_untracked()),
            city: non_empty(city.get_untracked()),
            country: non_empty(country.get_untracked()),
        };
        leptos::task::spawn_local(async move {
            match session.update_profile(update).await {
                Ok(()) => on_close.run(()),
                Err(err) => set_error.set(Some(err)),
            }
        });
    };

    view! {
        <Modal title="Edit Profile" on_close=on_close>
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
                <label>"City"</label>
                <input
                    type="text"
                    prop:value=move || city.get()
                    on:input=move |ev| set_city.set(event_target_value(&ev))
                />
                <label>"Country"</label>
                <input
                    type="text"
                    prop:value=move || country.get()
                    on:input=move |ev| set_country.set(event_target_value(&ev))
                />
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                <button class="btn" type="submit" disabled=move || session.loading.get()>
                    "Save Changes"
                </button>
            </form>
        </Modal>
    }
}
