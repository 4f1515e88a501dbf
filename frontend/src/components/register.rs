use crate::auth::{self, use_auth};
use crate::components::icons::ShieldCheck;
use crate::components::toast::Notification;
use crate::web::router::use_router;
use cancerguard_shared::RegisterRequest;
use cancerguard_shared::validate::validate_full_name;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (full_name, set_full_name) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Notification::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() || username.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some(("Please fill in all required fields".to_string(), true)));
            return;
        }
        if let Err(e) = validate_full_name(&full_name.get()) {
            set_error_msg.set(Some((e.to_string(), true)));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let name = full_name.get_untracked();
            let request = RegisterRequest {
                email: email.get_untracked(),
                username: username.get_untracked(),
                password: password.get_untracked(),
                full_name: if name.trim().is_empty() { None } else { Some(name) },
            };

            let api = auth::api_client(&auth_ctx.state.get_untracked());
            match api.execute(&request).await {
                // Account created; sign in with the same credentials so
                // the user lands straight on the dashboard.
                Ok(_) => match api
                    .login(&email.get_untracked(), &password.get_untracked())
                    .await
                {
                    Ok(token) => auth::login(&auth_ctx, token.user, token.access_token),
                    Err(e) => {
                        set_error_msg.set(Some((auth::handle_api_error(&auth_ctx, &e), true)));
                    }
                },
                Err(e) => {
                    set_error_msg.set(Some((auth::handle_api_error(&auth_ctx, &e), true)));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <ShieldCheck class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Create your account"</h1>
                        <p class="text-base-content/70">"Start analyzing medical images in minutes"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap().0}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@hospital.org"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                placeholder="dr_lovelace"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="full_name">
                                <span class="label-text">"Full name (optional)"</span>
                            </label>
                            <input
                                id="full_name"
                                type="text"
                                placeholder="Ada Lovelace"
                                on:input=move |ev| set_full_name.set(event_target_value(&ev))
                                prop:value=full_name
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Creating account..." }.into_any()
                                } else {
                                    "Create Account".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center text-sm mt-2">
                            "Already registered? "
                            <a class="link link-primary" on:click=move |_| router.navigate("/login")>
                                "Sign in"
                            </a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
