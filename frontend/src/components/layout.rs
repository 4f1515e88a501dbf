//! Shell layout for the authenticated views: navbar with navigation
//! links, the signed-in user's name, and the logout action.

use crate::auth::{logout, use_auth};
use crate::components::icons::{LogOut, ShieldCheck};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;

#[component]
fn NavLink(route: AppRoute, label: &'static str) -> impl IntoView {
    let router = use_router();

    let class = move || {
        if router.current_route().get() == route {
            "btn btn-ghost btn-sm btn-active"
        } else {
            "btn btn-ghost btn-sm"
        }
    };

    view! {
        <button class=class on:click=move |_| router.navigate(route.to_path())>
            {label}
        </button>
    }
}

#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let auth_ctx = use_auth();
    let auth_state = auth_ctx.state;

    let display_name = move || {
        auth_state
            .get()
            .user
            .map(|u| u.display_name().to_string())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        // The router's auth effect handles the redirect to login.
        logout(&auth_ctx);
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow-lg px-4">
                <div class="flex-1 gap-2">
                    <ShieldCheck class="h-7 w-7 text-primary" />
                    <span class="text-xl font-bold">"CancerGuard AI"</span>
                    <div class="hidden md:flex gap-1 ml-4">
                        <NavLink route=AppRoute::Dashboard label="Dashboard" />
                        <NavLink route=AppRoute::Predict label="New Analysis" />
                        <NavLink route=AppRoute::History label="History" />
                        <NavLink route=AppRoute::Profile label="Profile" />
                    </div>
                </div>
                <div class="flex-none gap-2">
                    <span class="text-sm opacity-70 hidden md:inline">{display_name}</span>
                    <button on:click=on_logout class="btn btn-outline btn-error btn-sm gap-2">
                        <LogOut class="h-4 w-4" /> "Sign Out"
                    </button>
                </div>
            </div>
            <main class="p-4 md:p-8 max-w-7xl mx-auto">{children()}</main>
        </div>
    }
}
