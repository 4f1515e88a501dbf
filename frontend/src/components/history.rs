//! Prediction history browser.
//!
//! One page of records is fetched on mount; search and category
//! filtering run locally over that page.

use crate::auth::{self, use_auth};
use crate::components::icons::{AlertTriangle, CheckCircle, Clock, Photo, Search};
use crate::components::toast::{Notification, Toast};
use cancerguard_shared::filter::{self, CategoryFilter};
use cancerguard_shared::protocol::HistoryQuery;
use cancerguard_shared::{Prediction, PredictionLabel, format};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn HistoryPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let auth_state = auth_ctx.state;

    let (records, set_records) = signal(Vec::<Prediction>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (category, set_category) = signal(CategoryFilter::All);
    let (notification, set_notification) = signal(Notification::None);

    Effect::new(move |_| {
        if !auth_state.get().is_authenticated {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            let api = auth::api_client(&auth_state.get_untracked());
            match api.execute(&HistoryQuery::default()).await {
                Ok(page) => set_records.set(page),
                Err(e) => {
                    set_notification.set(Some((auth::handle_api_error(&auth_ctx, &e), true)));
                }
            }
            set_loading.set(false);
        });
    });

    let visible = move || filter::filter_history(&records.get(), category.get(), &search.get());

    let filter_button = move |value: CategoryFilter| {
        view! {
            <button
                on:click=move |_| set_category.set(value)
                class=move || {
                    if category.get() == value {
                        "btn btn-sm btn-primary"
                    } else {
                        "btn btn-sm btn-ghost"
                    }
                }
            >
                {value.label()}
            </button>
        }
    };

    view! {
        <div class="max-w-5xl mx-auto space-y-6">
            <Toast notification=notification set_notification=set_notification />

            <div>
                <h1 class="text-3xl font-bold">"Prediction History"</h1>
                <p class="text-base-content/70">"Review your past analyses and their results."</p>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body py-4 flex-row flex-wrap items-center gap-3">
                    <label class="input input-bordered input-sm flex items-center gap-2 flex-1 min-w-48">
                        <Search class="h-4 w-4 opacity-50" />
                        <input
                            type="text"
                            placeholder="Search by filename..."
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                            prop:value=search
                            class="grow"
                        />
                    </label>
                    <div class="join">
                        {filter_button(CategoryFilter::All)}
                        {filter_button(CategoryFilter::Benign)}
                        {filter_button(CategoryFilter::Malignant)}
                    </div>
                </div>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex items-center justify-center h-64">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            >
                <Show
                    when=move || !visible().is_empty()
                    fallback=move || view! {
                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body items-center text-center py-16 text-base-content/60">
                                <Photo class="h-12 w-12 opacity-40" />
                                {move || if records.get().is_empty() {
                                    "No predictions yet. Upload an image to get started."
                                } else {
                                    "No predictions match the current filters."
                                }}
                            </div>
                        </div>
                    }
                >
                    <div class="space-y-3">
                        <For
                            each=visible
                            key=|record| record.id
                            children=move |record: Prediction| {
                                let is_benign = record.prediction == PredictionLabel::Benign;
                                view! {
                                    <div class="card bg-base-100 shadow">
                                        <div class="card-body py-4 flex-row items-center gap-4">
                                            <div class=if is_benign {
                                                "p-3 rounded-box bg-success/10 text-success"
                                            } else {
                                                "p-3 rounded-box bg-error/10 text-error"
                                            }>
                                                {if is_benign {
                                                    view! { <CheckCircle class="h-6 w-6" /> }.into_any()
                                                } else {
                                                    view! { <AlertTriangle class="h-6 w-6" /> }.into_any()
                                                }}
                                            </div>
                                            <div class="flex-1 min-w-0">
                                                <div class="font-medium truncate">
                                                    {if record.image_filename.is_empty() {
                                                        "Unnamed image".to_string()
                                                    } else {
                                                        record.image_filename.clone()
                                                    }}
                                                </div>
                                                <div class="text-sm text-base-content/60">
                                                    {record.created_at.format("%Y-%m-%d %H:%M UTC").to_string()}
                                                </div>
                                            </div>
                                            <div class="text-right">
                                                <span class=if is_benign {
                                                    "badge badge-success badge-outline"
                                                } else {
                                                    "badge badge-error badge-outline"
                                                }>
                                                    {record.prediction.as_str()}
                                                </span>
                                                <div class="text-sm text-base-content/60 mt-1">
                                                    {format::percent(record.confidence)} " confidence"
                                                </div>
                                            </div>
                                            <div class="hidden md:flex items-center gap-1 text-sm text-base-content/50">
                                                <Clock class="h-4 w-4" />
                                                {format::seconds(record.processing_time)}
                                            </div>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>

                    <div class="text-sm text-base-content/50 text-center">
                        {move || {
                            let shown = visible().len();
                            let total = records.get().len();
                            format!("Showing {shown} of {total} predictions")
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
