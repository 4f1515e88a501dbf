//! Route definitions and guard rules.
//!
//! Pure domain layer: no DOM or `web_sys` dependency, so the whole
//! guard table is testable natively.

use std::fmt::Display;

/// Application routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Public landing page (default route).
    #[default]
    Landing,
    Login,
    Register,
    /// Aggregate statistics (requires auth).
    Dashboard,
    /// Image upload and analysis (requires auth).
    Predict,
    /// Prediction history browser (requires auth).
    History,
    /// Profile editor (requires auth).
    Profile,
    NotFound,
}

impl AppRoute {
    /// Parse a URL path into a route.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Landing,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/dashboard" => Self::Dashboard,
            "/predict" => Self::Predict,
            "/history" => Self::History,
            "/profile" => Self::Profile,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::Predict => "/predict",
            Self::History => "/history",
            Self::Profile => "/profile",
            Self::NotFound => "/404",
        }
    }

    /// Whether this route is reachable only while authenticated.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Dashboard | Self::Predict | Self::History | Self::Profile
        )
    }

    /// Whether an authenticated user should be bounced away from this route.
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

/// The guard table: where a navigation attempt actually lands.
///
/// Unknown paths fall back to the landing page; protected routes demand
/// authentication; login/register bounce authenticated users to the
/// dashboard. A pure function of the single authentication boolean.
pub fn resolve(target: AppRoute, is_authenticated: bool) -> AppRoute {
    if target == AppRoute::NotFound {
        return AppRoute::Landing;
    }
    if target.requires_auth() && !is_authenticated {
        return AppRoute::auth_failure_redirect();
    }
    if target.should_redirect_when_authenticated() && is_authenticated {
        return AppRoute::auth_success_redirect();
    }
    target
}

/// Parse-then-resolve, for full page loads: the guard applies to the
/// initial URL exactly as it does to in-app navigation.
pub fn resolve_path(path: &str, is_authenticated: bool) -> AppRoute {
    resolve(AppRoute::from_path(path), is_authenticated)
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

// =========================================================
// Unit Tests
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_round_trip() {
        for route in [
            AppRoute::Landing,
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::Dashboard,
            AppRoute::Predict,
            AppRoute::History,
            AppRoute::Profile,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(AppRoute::from_path("/bogus"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/dashboard/extra"), AppRoute::NotFound);
    }

    #[test]
    fn test_protected_routes_redirect_to_login_when_unauthenticated() {
        for route in [
            AppRoute::Dashboard,
            AppRoute::Predict,
            AppRoute::History,
            AppRoute::Profile,
        ] {
            assert_eq!(resolve(route, false), AppRoute::Login);
            assert_eq!(resolve(route, true), route);
        }
    }

    #[test]
    fn test_auth_pages_redirect_to_dashboard_when_authenticated() {
        for route in [AppRoute::Login, AppRoute::Register] {
            assert_eq!(resolve(route, true), AppRoute::Dashboard);
            assert_eq!(resolve(route, false), route);
        }
    }

    #[test]
    fn test_unknown_routes_fall_back_to_landing() {
        assert_eq!(resolve(AppRoute::NotFound, false), AppRoute::Landing);
        assert_eq!(resolve(AppRoute::NotFound, true), AppRoute::Landing);
    }

    #[test]
    fn test_deep_link_to_protected_path_resolves_through_guard() {
        // A direct browser load of a protected URL never yields the
        // protected route while unauthenticated.
        assert_eq!(resolve_path("/dashboard", false), AppRoute::Login);
        assert_eq!(resolve_path("/history", false), AppRoute::Login);
        assert_eq!(resolve_path("/dashboard", true), AppRoute::Dashboard);
        assert_eq!(resolve_path("/login", true), AppRoute::Dashboard);
        assert_eq!(resolve_path("/bogus", true), AppRoute::Landing);
    }

    #[test]
    fn test_landing_is_public_in_both_states() {
        assert_eq!(resolve(AppRoute::Landing, false), AppRoute::Landing);
        assert_eq!(resolve(AppRoute::Landing, true), AppRoute::Landing);
    }
}
