//! Profile view. Email and username are read-only; only the full name
//! is editable, and a saved change flows back into the auth store.

use crate::auth::{self, use_auth};
use crate::components::icons::UserCircle;
use crate::components::toast::{Notification, Toast};
use cancerguard_shared::UpdateProfileRequest;
use cancerguard_shared::protocol::GetProfileRequest;
use cancerguard_shared::validate::validate_full_name;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth_ctx = use_auth();
    let auth_state = auth_ctx.state;

    let (editing, set_editing) = signal(false);
    let (full_name, set_full_name) = signal(String::new());
    let (is_saving, set_is_saving) = signal(false);
    let (notification, set_notification) = signal(Notification::None);

    // Refresh the cached user record on mount; the persisted copy may be
    // stale after edits from another tab. Tracks a memo of the auth flag,
    // not the whole state, so the update below does not re-trigger it.
    let is_authenticated = Memo::new(move |_| auth_state.get().is_authenticated);
    Effect::new(move |_| {
        if !is_authenticated.get() {
            return;
        }
        spawn_local(async move {
            let api = auth::api_client(&auth_state.get_untracked());
            match api.execute(&GetProfileRequest).await {
                Ok(user) => auth::update_user(&auth_ctx, user),
                Err(e) => {
                    set_notification.set(Some((auth::handle_api_error(&auth_ctx, &e), true)));
                }
            }
        });
    });

    let begin_edit = move |_| {
        let current = auth_state
            .get_untracked()
            .user
            .and_then(|u| u.full_name)
            .unwrap_or_default();
        set_full_name.set(current);
        set_editing.set(true);
    };

    let cancel_edit = move |_| set_editing.set(false);

    let save = move |_| {
        let name = full_name.get_untracked();
        if let Err(e) = validate_full_name(&name) {
            set_notification.set(Some((e.to_string(), true)));
            return;
        }

        set_is_saving.set(true);
        spawn_local(async move {
            let trimmed = name.trim();
            let request = UpdateProfileRequest {
                full_name: if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                },
            };

            let api = auth::api_client(&auth_state.get_untracked());
            match api.execute(&request).await {
                Ok(user) => {
                    auth::update_user(&auth_ctx, user);
                    set_editing.set(false);
                    set_notification.set(Some(("Profile updated".to_string(), false)));
                }
                Err(e) => {
                    set_notification.set(Some((auth::handle_api_error(&auth_ctx, &e), true)));
                }
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <Toast notification=notification set_notification=set_notification />

            <div>
                <h1 class="text-3xl font-bold">"Profile"</h1>
                <p class="text-base-content/70">"Your account details."</p>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <div class="flex items-center gap-4 mb-4">
                        <div class="p-2 bg-primary/10 rounded-full text-primary">
                            <UserCircle class="h-14 w-14" />
                        </div>
                        <div>
                            <h2 class="text-xl font-semibold">
                                {move || {
                                    auth_state
                                        .get()
                                        .user
                                        .map(|u| u.display_name().to_string())
                                        .unwrap_or_default()
                                }}
                            </h2>
                            <p class="text-sm text-base-content/60">
                                {move || {
                                    auth_state
                                        .get()
                                        .user
                                        .map(|u| {
                                            format!(
                                                "Member since {}",
                                                u.created_at.format("%B %Y")
                                            )
                                        })
                                        .unwrap_or_default()
                                }}
                            </p>
                        </div>
                    </div>

                    <div class="divider my-0"></div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4 py-2">
                        <div>
                            <div class="text-sm text-base-content/60">"Email"</div>
                            <div class="font-medium">
                                {move || auth_state.get().user.map(|u| u.email).unwrap_or_default()}
                            </div>
                        </div>
                        <div>
                            <div class="text-sm text-base-content/60">"Username"</div>
                            <div class="font-medium">
                                {move || auth_state.get().user.map(|u| u.username).unwrap_or_default()}
                            </div>
                        </div>
                    </div>

                    <div class="divider my-0"></div>

                    <Show
                        when=move || editing.get()
                        fallback=move || view! {
                            <div class="flex items-end justify-between gap-4 py-2">
                                <div>
                                    <div class="text-sm text-base-content/60">"Full name"</div>
                                    <div class="font-medium">
                                        {move || {
                                            auth_state
                                                .get()
                                                .user
                                                .and_then(|u| u.full_name)
                                                .filter(|n| !n.trim().is_empty())
                                                .unwrap_or_else(|| "Not set".to_string())
                                        }}
                                    </div>
                                </div>
                                <button on:click=begin_edit class="btn btn-sm btn-outline">
                                    "Edit"
                                </button>
                            </div>
                        }
                    >
                        <div class="py-2 space-y-3">
                            <div class="form-control">
                                <label class="label" for="full_name">
                                    <span class="label-text">"Full name"</span>
                                </label>
                                <input
                                    id="full_name"
                                    type="text"
                                    placeholder="Ada Lovelace"
                                    on:input=move |ev| set_full_name.set(event_target_value(&ev))
                                    prop:value=full_name
                                    class="input input-bordered w-full"
                                />
                            </div>
                            <div class="flex gap-2">
                                <button
                                    on:click=save
                                    disabled=move || is_saving.get()
                                    class="btn btn-primary btn-sm"
                                >
                                    {move || if is_saving.get() {
                                        view! { <span class="loading loading-spinner loading-xs"></span> "Saving..." }.into_any()
                                    } else {
                                        "Save".into_any()
                                    }}
                                </button>
                                <button
                                    on:click=cancel_edit
                                    disabled=move || is_saving.get()
                                    class="btn btn-ghost btn-sm"
                                >
                                    "Cancel"
                                </button>
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
