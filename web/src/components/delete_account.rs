//! Account deletion dialog. Requires typed confirmation before the
//! irreversible request is sent.

use leptos::prelude::*;

use crate::components::Modal;
use crate::state::session::use_session_context;

const CONFIRM_PHRASE: &str = "DELETE";

#[component]
pub fn DeleteAccountModal(on_close: Callback<()>) -> impl IntoView {
    let session = use_session_context();
    let (confirmation, set_confirmation) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if confirmation.get_untracked() != CONFIRM_PHRASE {
            set_error.set(Some(format!("Type {CONFIRM_PHRASE} to confirm")));
            return;
        }
        set_error.set(None);
        leptos::task::spawn_local(async move {
            // On success logout() redirects; the modal never sees it.
            if let Err(err) = session.delete_account().await {
                set_error.set(Some(err));
            }
        });
    };

    view! {
        <Modal title="Delete Account" on_close=on_close>
            <form on:submit=submit>
                <p class="warning-text">
                    "This permanently deletes your account, your uploads and your \
                     reading history. Type " <strong>{CONFIRM_PHRASE}</strong> " to confirm."
                </p>
                <input
                    type="text"
                    prop:value=move || confirmation.get()
                    on:input=move |ev| set_confirmation.set(event_target_value(&ev))
                />
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                <button class="btn btn-danger" type="submit" disabled=move || session.loading.get()>
                    "Delete My Account"
                </button>
            </form>
        </Modal>
    }
}
