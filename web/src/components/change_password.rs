//! Password change dialog with client-side validation before the request.

use leptos::prelude::*;

use crate::components::Modal;
use crate::state::session::use_session_context;

const MIN_PASSWORD_LEN: usize = 6;

#[component]
pub fn ChangePasswordModal(on_close: Callback<()>) -> impl IntoView {
    let session = use_session_context();
    let (current, set_current) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new = new_password.get_untracked();
        if new.len() < MIN_PASSWORD_LEN {
            set_error.set(Some(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
            return;
        }
        if new != confirm.get_untracked() {
            set_error.set(Some("Passwords do not match".to_string()));
            return;
        }
        set_error.set(None);
        let current = current.get_untracked();
        leptos::task::spawn_local(async move {
            match session.change_password(current, new).await {
                Ok(()) => on_close.run(()),
                Err(err) => set_error.set(Some(err)),
            }
        });
    };

    view! {
        <Modal title="Change Password" on_close=on_close>
            <form on:submit=submit>
                <label>"Current password"</label>
                <input
                    type="password"
                    prop:value=move || current.get()
                    on:input=move |ev| set_current.set(event_target_value(&ev))
                />
                <label>"New password"</label>
                <input
                    type="password"
                    prop:value=move || new_password.get()
                    on:input=move |ev| set_new_password.set(event_target_value(&ev))
                />
                <label>"Confirm new password"</label>
                <input
                    type="password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                />
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                <button class="btn" type="submit" disabled=move || session.loading.get()>
                    "Update Password"
                </button>
            </form>
        </Modal>
    }
}
