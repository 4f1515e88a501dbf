//! Routing service.
//!
//! Wraps the `web_sys` History API; all `window.history` access is
//! concentrated here. Navigation runs through the pure guard table in
//! [`super::route::resolve`], and an effect watches the injected
//! authentication signal so login/logout redirect automatically.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, resolve, resolve_path};

/// Current browser path.
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Used for redirects so the denied URL does not land in history.
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Router service.
///
/// Drives the UI through a route signal. The authentication check is an
/// injected signal, keeping this module decoupled from the auth store.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        // Guard the initial URL too: a direct load of a protected path
        // must never expose the protected route, even for one render.
        let path = current_path();
        let initial_route = resolve_path(&path, is_authenticated.get_untracked());
        if initial_route != AppRoute::from_path(&path) {
            replace_history_state(initial_route.to_path());
        }
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Navigate to a path, subject to the guard table.
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path));
    }

    fn navigate_to_route(&self, target: AppRoute) {
        let is_auth = self.is_authenticated.get_untracked();
        let landing = resolve(target, is_auth);

        if landing != target {
            web_sys::console::log_1(
                &format!("[Router] {} redirected to {}", target, landing).into(),
            );
            // A redirect replaces rather than pushes, so Back does not
            // bounce through the denied route again.
            replace_history_state(landing.to_path());
        } else {
            push_history_state(landing.to_path());
        }
        self.set_route.set(landing);
    }

    /// Browser back/forward support. The guard applies on popstate too.
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            let landing = resolve(target, is_authenticated.get_untracked());

            if landing != target {
                replace_history_state(landing.to_path());
            }
            set_route.set(landing);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Leak the closure to keep the listener alive for the page lifetime.
        closure.forget();
    }

    /// Redirect when the authentication state itself changes:
    /// login moves off the auth pages, logout moves off protected pages.
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();
            let landing = resolve(route, is_auth);

            if landing != route {
                web_sys::console::log_1(
                    &format!("[Router] auth changed, {} redirected to {}", route, landing).into(),
                );
                push_history_state(landing.to_path());
                set_route.set(landing);
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// Fetch the router service from context.
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI Components
// ============================================================================

/// Router root component; provides the routing context at the app root.
#[component]
pub fn Router(
    /// Authentication state signal.
    is_authenticated: Signal<bool>,
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// Renders the view matching the current route.
#[component]
pub fn RouterOutlet(
    /// Route matching function: current route in, view out.
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
