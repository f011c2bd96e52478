//! Profile image upload dialog.

use leptos::prelude::*;

use crate::components::Modal;
use crate::state::session::use_session_context;

#[component]
pub fn ChangeImageModal(on_close: Callback<()>) -> impl IntoView {
    let session = use_session_context();
    let (error, set_error) = signal(None::<String>);
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = file_input.get_untracked() else {
            return;
        };
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            set_error.set(Some("Choose an image first".to_string()));
            return;
        };
        set_error.set(None);
        leptos::task::spawn_local(async move {
            match session.update_profile_image(&file).await {
                Ok(()) => on_close.run(()),
                Err(err) => set_error.set(Some(err)),
            }
        });
    };

    view! {
        <Modal title="Change Profile Image" on_close=on_close>
            <form on:submit=submit>
                <input type="file" accept="image/*" node_ref=file_input/>
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                <button class="btn" type="submit" disabled=move || session.loading.get()>
                    "Upload"
                </button>
            </form>
        </Modal>
    }
}
