//! Account settings: profile card, library stats and the account dialogs.

use leptos::prelude::*;

use crate::components::{
    ChangeImageModal, ChangePasswordModal, DashboardLayout, DeleteAccountModal, EditProfileModal,
};
use crate::services::api;
use crate::state::session::use_session_context;
use crate::utils::media::resolve_media_url;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ActiveModal {
    None,
    Profile,
    Password,
    Image,
    Delete,
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = use_session_context();
    let modal = RwSignal::new(ActiveModal::None);
    let favorites_count = RwSignal::new(0usize);
    let history_count = RwSignal::new(0usize);

    leptos::task::spawn_local(async move {
        match api::favorites::list(None).await {
            Ok(list) => favorites_count.set(list.len()),
            Err(err) => log::warn!("Failed to load favorites count: {err}"),
        }
    });
    leptos::task::spawn_local(async move {
        match api::history::list(None).await {
            Ok(list) => history_count.set(list.len()),
            Err(err) => log::warn!("Failed to load history count: {err}"),
        }
    });

    let profile_image = move || {
        session.session.with(|s| {
            s.as_ref()
                .and_then(|s| s.profile_image.as_deref().map(resolve_media_url))
        })
    };
    let email = move || {
        session
            .session
            .with(|s| s.as_ref().map(|s| s.email.clone()).unwrap_or_default())
    };

    let close = Callback::new(move |()| modal.set(ActiveModal::None));

    view! {
        <DashboardLayout>
            <h1>"Settings"</h1>
            <div class="card profile-card">
                {move || {
                    profile_image()
                        .map(|url| view! { <img class="profile-image" src=url/> })
                }}
                <h2>{move || session.username().unwrap_or_default()}</h2>
                <p class="profile-email">{email}</p>
                <div class="profile-stats">
                    <span>{move || format!("{} favorites", favorites_count.get())}</span>
                    <span>{move || format!("{} books read", history_count.get())}</span>
                </div>
            </div>

            <div class="card settings-actions">
                <button class="btn" on:click=move |_| modal.set(ActiveModal::Profile)>
                    "Edit Profile"
                </button>
                <button class="btn" on:click=move |_| modal.set(ActiveModal::Image)>
                    "Change Profile Image"
                </button>
                <button class="btn" on:click=move |_| modal.set(ActiveModal::Password)>
                    "Change Password"
                </button>
                <button class="btn btn-secondary" on:click=move |_| session.logout()>
                    "Logout"
                </button>
                <button class="btn btn-danger" on:click=move |_| modal.set(ActiveModal::Delete)>
                    "Delete Account"
                </button>
            </div>

            {move || match modal.get() {
                ActiveModal::None => ().into_any(),
                ActiveModal::Profile => view! { <EditProfileModal on_close=close/> }.into_any(),
                ActiveModal::Password => {
                    view! { <ChangePasswordModal on_close=close/> }.into_any()
                }
                ActiveModal::Image => view! { <ChangeImageModal on_close=close/> }.into_any(),
                ActiveModal::Delete => view! { <DeleteAccountModal on_close=close/> }.into_any(),
            }}
        </DashboardLayout>
    }
}
