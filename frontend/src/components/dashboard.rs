use crate::auth::{self, use_auth};
use crate::components::icons::{Camera, ChartBar, Clock, Heart};
use crate::components::toast::{Notification, Toast};
use crate::web::router::use_router;
use cancerguard_shared::format;
use cancerguard_shared::protocol::{DashboardRequest, UserStatsRequest};
use cancerguard_shared::{AnalyticsData, UserStats};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let auth_state = auth_ctx.state;
    let router = use_router();

    let (dashboard, set_dashboard) = signal(AnalyticsData::default());
    let (user_stats, set_user_stats) = signal(UserStats::default());
    let (loading, set_loading) = signal(true);
    let (notification, set_notification) = signal(Notification::None);

    let load_stats = move || {
        set_loading.set(true);
        spawn_local(async move {
            let api = auth::api_client(&auth_state.get_untracked());

            match api.execute(&DashboardRequest).await {
                Ok(data) => set_dashboard.set(data),
                Err(e) => {
                    set_notification.set(Some((auth::handle_api_error(&auth_ctx, &e), true)));
                }
            }
            match api.execute(&UserStatsRequest).await {
                Ok(data) => set_user_stats.set(data),
                Err(e) => {
                    set_notification.set(Some((auth::handle_api_error(&auth_ctx, &e), true)));
                }
            }
            set_loading.set(false);
        });
    };

    // Fetch on mount, once authenticated state is known.
    Effect::new(move |_| {
        if auth_state.get().is_authenticated {
            load_stats();
        }
    });

    let greeting = move || {
        auth_state
            .get()
            .user
            .map(|u| format!("Welcome back, {}!", u.display_name()))
            .unwrap_or_else(|| "Welcome back!".to_string())
    };

    view! {
        <div class="space-y-8">
            <Toast notification=notification set_notification=set_notification />

            <div class="card bg-primary text-primary-content shadow-xl">
                <div class="card-body flex-row items-center justify-between">
                    <div>
                        <h1 class="card-title text-2xl">{greeting}</h1>
                        <p class="opacity-80">
                            "Ready to analyze medical images with AI-powered precision?"
                        </p>
                    </div>
                    <button
                        on:click=move |_| router.navigate("/predict")
                        class="btn bg-base-100 text-primary hover:bg-base-200 gap-2"
                    >
                        <Camera class="h-5 w-5" /> "New Analysis"
                    </button>
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
                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <div class="stat">
                        <div class="stat-figure text-primary">
                            <ChartBar class="h-8 w-8" />
                        </div>
                        <div class="stat-title">"Total Predictions"</div>
                        <div class="stat-value text-primary">
                            {move || dashboard.get().total_predictions}
                        </div>
                    </div>
                    <div class="stat">
                        <div class="stat-figure text-success">
                            <Heart class="h-8 w-8" />
                        </div>
                        <div class="stat-title">"Benign Cases"</div>
                        <div class="stat-value text-success">
                            {move || dashboard.get().benign_predictions}
                        </div>
                    </div>
                    <div class="stat">
                        <div class="stat-figure text-error">
                            <Heart class="h-8 w-8" />
                        </div>
                        <div class="stat-title">"Malignant Cases"</div>
                        <div class="stat-value text-error">
                            {move || dashboard.get().malignant_predictions}
                        </div>
                    </div>
                    <div class="stat">
                        <div class="stat-figure">
                            <Clock class="h-8 w-8 opacity-60" />
                        </div>
                        <div class="stat-title">"Avg Processing Time"</div>
                        <div class="stat-value text-2xl">
                            {move || format::seconds(dashboard.get().average_processing_time)}
                        </div>
                        <div class="stat-desc">
                            {move || format!("{} analyses this week", dashboard.get().recent_predictions)}
                        </div>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title">"Your Activity"</h3>
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mt-2">
                            <div class="text-center p-4 bg-base-200 rounded-box">
                                <div class="text-2xl font-bold">
                                    {move || user_stats.get().total_predictions}
                                </div>
                                <div class="text-sm text-base-content/70">"Your predictions"</div>
                            </div>
                            <div class="text-center p-4 bg-base-200 rounded-box">
                                <div class="text-2xl font-bold text-success">
                                    {move || user_stats.get().benign_predictions}
                                </div>
                                <div class="text-sm text-base-content/70">"Benign results"</div>
                            </div>
                            <div class="text-center p-4 bg-base-200 rounded-box">
                                <div class="text-2xl font-bold text-error">
                                    {move || user_stats.get().malignant_predictions}
                                </div>
                                <div class="text-sm text-base-content/70">"Malignant results"</div>
                            </div>
                            <div class="text-center p-4 bg-base-200 rounded-box">
                                <div class="text-2xl font-bold">
                                    {move || format::percent(user_stats.get().average_confidence)}
                                </div>
                                <div class="text-sm text-base-content/70">"Avg confidence"</div>
                            </div>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
