//! CancerGuard AI frontend.
//!
//! Context-driven layering:
//! - `web::route`: route definitions (domain model)
//! - `web::router`: routing service (history integration + guards)
//! - `auth`: authentication state management
//! - `api`: typed HTTP client over the backend protocol
//! - `components`: UI layer

mod api;
mod auth;
mod components {
    pub mod dashboard;
    pub mod history;
    mod icons;
    pub mod landing;
    mod layout;
    pub mod login;
    pub mod predict;
    pub mod profile;
    pub mod register;
    mod toast;

    pub use layout::Shell;
}
mod config;

// Thin wrappers over the browser-native APIs, in place of the gloo-*
// crates, to keep the WASM binary small.
pub(crate) mod web;

use crate::auth::{AuthContext, init_auth};
use crate::components::Shell;
use crate::components::dashboard::DashboardPage;
use crate::components::history::HistoryPage;
use crate::components::landing::LandingPage;
use crate::components::login::LoginPage;
use crate::components::predict::PredictPage;
use crate::components::profile::ProfilePage;
use crate::components::register::RegisterPage;

use leptos::prelude::*;

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// Maps a resolved route to its view. Authenticated pages render inside
/// the shared [`Shell`] chrome; the guard in `web::route` has already
/// kept unauthenticated visitors out of them.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Landing | AppRoute::NotFound => view! { <LandingPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Dashboard => view! {
            <Shell>
                <DashboardPage />
            </Shell>
        }
        .into_any(),
        AppRoute::Predict => view! {
            <Shell>
                <PredictPage />
            </Shell>
        }
        .into_any(),
        AppRoute::History => view! {
            <Shell>
                <HistoryPage />
            </Shell>
        }
        .into_any(),
        AppRoute::Profile => view! {
            <Shell>
                <ProfilePage />
            </Shell>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. Create the auth context before anything reads it.
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. Restore a persisted session from LocalStorage.
    init_auth(&auth_ctx);

    // 3. Hand the auth signal to the router so guards stay decoupled
    //    from the auth store itself.
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
