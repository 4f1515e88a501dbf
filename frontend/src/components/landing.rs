//! Public landing page.

use crate::auth::use_auth;
use crate::components::icons::{ArrowRight, ChartBar, Clock, ShieldCheck};
use crate::web::router::use_router;
use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth_state = use_auth().state;
    let router = use_router();

    let is_authenticated = move || auth_state.get().is_authenticated;

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow-lg px-4">
                <div class="flex-1 gap-2">
                    <ShieldCheck class="h-7 w-7 text-primary" />
                    <span class="text-xl font-bold">"CancerGuard AI"</span>
                </div>
                <div class="flex-none gap-2">
                    <Show
                        when=is_authenticated
                        fallback=move || view! {
                            <button on:click=move |_| router.navigate("/login") class="btn btn-ghost btn-sm">
                                "Sign In"
                            </button>
                            <button on:click=move |_| router.navigate("/register") class="btn btn-primary btn-sm">
                                "Get Started"
                            </button>
                        }
                    >
                        <button on:click=move |_| router.navigate("/dashboard") class="btn btn-primary btn-sm">
                            "Open Dashboard"
                        </button>
                    </Show>
                </div>
            </div>

            <div class="hero py-20">
                <div class="hero-content text-center">
                    <div class="max-w-2xl">
                        <div class="flex justify-center mb-6">
                            <div class="p-4 bg-primary/10 rounded-2xl text-primary">
                                <ShieldCheck class="h-14 w-14" />
                            </div>
                        </div>
                        <h1 class="text-5xl font-bold">"AI-Assisted Breast Cancer Detection"</h1>
                        <p class="py-6 text-base-content/70">
                            "Upload a medical image and receive an instant classification with \
                             confidence scores, backed by a CNN-RNN hybrid model. Built to \
                             assist healthcare professionals, never to replace them."
                        </p>
                        <button on:click=move |_| router.navigate("/register") class="btn btn-primary btn-lg gap-2">
                            "Start Analyzing" <ArrowRight class="h-5 w-5" />
                        </button>
                    </div>
                </div>
            </div>

            <div class="max-w-5xl mx-auto px-4 pb-20 grid grid-cols-1 md:grid-cols-3 gap-6">
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body items-center text-center">
                        <ChartBar class="h-10 w-10 text-primary" />
                        <h2 class="card-title">"Confidence Scores"</h2>
                        <p class="text-sm text-base-content/70">
                            "Every result carries a full probability breakdown over both classes."
                        </p>
                    </div>
                </div>
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body items-center text-center">
                        <Clock class="h-10 w-10 text-primary" />
                        <h2 class="card-title">"Instant Results"</h2>
                        <p class="text-sm text-base-content/70">
                            "Analyses complete in seconds and land in your private history."
                        </p>
                    </div>
                </div>
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body items-center text-center">
                        <ShieldCheck class="h-10 w-10 text-primary" />
                        <h2 class="card-title">"Private by Default"</h2>
                        <p class="text-sm text-base-content/70">
                            "Your uploads and results are only visible to your own account."
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
