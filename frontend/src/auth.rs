//! Authentication state store.
//!
//! Holds the `(user, token, is_authenticated)` triple behind a signal
//! pair shared through context, and persists the session across page
//! reloads. No network access happens here; the store is pure state plus
//! persistence, mutated only through its own transition functions.

use crate::api::{ApiClient, ApiError};
use crate::config;
use crate::web::LocalStorage;
use cancerguard_shared::User;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

const STORAGE_SESSION_KEY: &str = "cancerguard_session";

/// Authentication state.
///
/// Invariant: `is_authenticated` exactly tracks token presence. The
/// constructors below are the only places the triple is assembled.
#[derive(Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

impl AuthState {
    /// State after a successful login. An empty token string is
    /// normalized to `None` so the invariant holds even for a degenerate
    /// credential.
    fn logged_in(user: User, token: String) -> Self {
        let token = (!token.is_empty()).then_some(token);
        Self {
            user: Some(user),
            is_authenticated: token.is_some(),
            token,
        }
    }

    /// Cleared state; identical to `Default`.
    fn logged_out() -> Self {
        Self::default()
    }

    /// Replace the cached user record, leaving the credential untouched.
    fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }
}

/// Durable form of a session, written to LocalStorage on every mutation.
#[derive(Serialize, Deserialize)]
struct SessionRecord {
    user: User,
    token: String,
}

impl SessionRecord {
    fn restore(self) -> AuthState {
        AuthState::logged_in(self.user, self.token)
    }
}

/// Auth context: read/write signal pair shared through context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// Authentication signal for injection into the router service.
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the auth context from context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// API client carrying the current token snapshot.
pub fn api_client(state: &AuthState) -> ApiClient {
    ApiClient::new(config::api_base_url(), state.token.clone())
}

fn persist(state: &AuthState) {
    match (&state.user, &state.token) {
        (Some(user), Some(token)) => {
            let record = SessionRecord {
                user: user.clone(),
                token: token.clone(),
            };
            if let Ok(json) = serde_json::to_string(&record) {
                LocalStorage::set(STORAGE_SESSION_KEY, &json);
            }
        }
        _ => {
            LocalStorage::delete(STORAGE_SESSION_KEY);
        }
    }
}

/// Restore the persisted session, if any. A record that no longer parses
/// is deleted and treated as logged out.
pub fn init_auth(ctx: &AuthContext) {
    let Some(json) = LocalStorage::get(STORAGE_SESSION_KEY) else {
        return;
    };
    match serde_json::from_str::<SessionRecord>(&json) {
        Ok(record) => ctx.set_state.set(record.restore()),
        Err(_) => {
            LocalStorage::delete(STORAGE_SESSION_KEY);
        }
    }
}

/// Record a successful login: sets all three fields consistently and
/// persists the session.
pub fn login(ctx: &AuthContext, user: User, token: String) {
    let state = AuthState::logged_in(user, token);
    persist(&state);
    ctx.set_state.set(state);
}

/// Clear the session. Idempotent and last-write-wins; safe to call from
/// the 401 path while other requests are in flight.
pub fn logout(ctx: &AuthContext) {
    let state = AuthState::logged_out();
    persist(&state);
    ctx.set_state.set(state);
    // No manual navigation: the router watches the auth signal.
}

/// Replace the cached user record after a profile update. No-op while
/// logged out.
pub fn update_user(ctx: &AuthContext, user: User) {
    let current = ctx.state.get_untracked();
    if !current.is_authenticated {
        return;
    }
    let state = current.with_user(user);
    persist(&state);
    ctx.set_state.set(state);
}

/// Single funnel for request failures. A rejected credential forces the
/// (idempotent) logout, which in turn makes the router redirect to the
/// login page; everything else is returned as a notification message.
pub fn handle_api_error(ctx: &AuthContext, err: &ApiError) -> String {
    if *err == ApiError::AuthExpired {
        web_sys::console::warn_1(&"[Auth] credential rejected, clearing session".into());
        logout(ctx);
    } else {
        web_sys::console::error_1(&format!("[Api] {}", err).into());
    }
    err.user_message()
}

// =========================================================
// Unit Tests
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn user() -> User {
        User {
            id: 1,
            email: "ada@example.org".to_string(),
            username: "ada".to_string(),
            full_name: Some("Ada Lovelace".to_string()),
            is_active: true,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_login_sets_all_three_fields_consistently() {
        let state = AuthState::logged_in(user(), "tok".to_string());
        assert!(state.is_authenticated);
        assert_eq!(state.token.as_deref(), Some("tok"));
        assert!(state.user.is_some());
    }

    #[test]
    fn test_is_authenticated_tracks_token_presence() {
        let state = AuthState::logged_in(user(), String::new());
        assert!(!state.is_authenticated);
        // An empty token never survives as `Some("")`.
        assert_eq!(state.token, None);
        assert_eq!(AuthState::default().token, None);
        assert!(!AuthState::default().is_authenticated);
    }

    #[test]
    fn test_login_then_logout_is_the_initial_state() {
        let _ = AuthState::logged_in(user(), "tok".to_string());
        let state = AuthState::logged_out();
        assert!(state == AuthState::default());
    }

    #[test]
    fn test_with_user_leaves_credential_untouched() {
        let state = AuthState::logged_in(user(), "tok".to_string());
        let mut updated_user = user();
        updated_user.full_name = Some("A. Lovelace".to_string());

        let state = state.with_user(updated_user);
        assert_eq!(state.token.as_deref(), Some("tok"));
        assert!(state.is_authenticated);
        assert_eq!(
            state.user.unwrap().full_name.as_deref(),
            Some("A. Lovelace")
        );
    }

    #[test]
    fn test_session_record_round_trip() {
        let record = SessionRecord {
            user: user(),
            token: "tok".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let restored: SessionRecord = serde_json::from_str(&json).unwrap();
        let state = restored.restore();
        assert!(state.is_authenticated);
        assert_eq!(state.user.unwrap().username, "ada");
    }

    #[test]
    fn test_corrupt_session_record_fails_to_parse() {
        assert!(serde_json::from_str::<SessionRecord>("{\"token\":1}").is_err());
    }
}
