//! Session Store
//!
//! Single source of truth for "is a user logged in, and as whom".
//! Reactive state via Leptos signals, persisted to localStorage so the
//! session survives a reload. Provided to the component tree as an explicit
//! context object; nothing here is a process-global.
//!
//! Invariant: token and user are set and cleared together. Every mutation
//! goes through `establish` or `logout`, and hydration drops half-written
//! sessions.

use leptos::*;

use crate::api;
use crate::api::types::{AuthResponse, RegisterForm, User, UserRole};
use crate::api::ApiError;

/// Durable storage key for the bearer token
pub const TOKEN_KEY: &str = "token";
/// Durable storage key for the serialized user record
pub const USER_KEY: &str = "user";

/// Session state provided to all components
#[derive(Clone)]
pub struct SessionState {
    /// Bearer token, present iff authenticated
    pub token: RwSignal<Option<String>>,
    /// Authenticated user record
    pub user: RwSignal<Option<User>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide session state to the component tree, hydrating from storage
pub fn provide_session_state() {
    let (token, user) = reconcile(stored_token(), stored_user());
    if token.is_none() {
        // a half-written session is dropped entirely
        clear_storage();
    }

    let state = SessionState {
        token: create_rw_signal(token),
        user: create_rw_signal(user),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl SessionState {
    /// True iff a token is present
    pub fn is_authenticated(&self) -> bool {
        self.token.with(|t| t.is_some())
    }

    /// Role of the logged-in user, `Unknown` when anonymous
    pub fn role(&self) -> UserRole {
        self.user
            .with(|u| u.as_ref().map(|u| u.user_type))
            .unwrap_or_default()
    }

    /// Register a new account and open a session for it
    pub async fn register(&self, form: &RegisterForm) -> Result<User, ApiError> {
        let auth = api::auth::register(form).await?;
        Ok(self.establish(auth))
    }

    /// Log in with credentials and open a session
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let auth = api::auth::login(email, password).await?;
        Ok(self.establish(auth))
    }

    /// Close the session, clearing memory and durable storage. Idempotent.
    pub fn logout(&self) {
        clear_storage();
        self.token.set(None);
        self.user.set(None);
    }

    /// Re-fetch the authenticated user; any failure invalidates the session
    /// and re-raises so the caller can react.
    pub async fn refresh_current_user(&self) -> Result<User, ApiError> {
        match api::auth::current_user().await {
            Ok(user) => {
                persist_user(&user);
                self.user.set(Some(user.clone()));
                Ok(user)
            }
            Err(err) => {
                self.logout();
                Err(err)
            }
        }
    }

    /// Store a fresh token/user pair in durable storage first, then in the
    /// signals, and return the user.
    fn establish(&self, auth: AuthResponse) -> User {
        let AuthResponse { token, user } = auth;
        persist_session(&token, &user);
        self.token.set(Some(token));
        self.user.set(Some(user.clone()));
        user
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

/// A session is only valid when both halves are present.
fn reconcile(token: Option<String>, user: Option<User>) -> (Option<String>, Option<User>) {
    match (token, user) {
        (Some(token), Some(user)) => (Some(token), Some(user)),
        _ => (None, None),
    }
}

// ============ Durable storage ============

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Token as currently persisted; read synchronously by the API layer while
/// building each request.
pub fn stored_token() -> Option<String> {
    local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
}

fn stored_user() -> Option<User> {
    let raw = local_storage().and_then(|s| s.get_item(USER_KEY).ok().flatten())?;
    serde_json::from_str(&raw).ok()
}

fn persist_session(token: &str, user: &User) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
    persist_user(user);
}

fn persist_user(user: &User) {
    if let Some(storage) = local_storage() {
        if let Ok(serialized) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &serialized);
        }
    }
}

fn clear_storage() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 1,
            email: "chef@example.com".to_string(),
            first_name: "Marco".to_string(),
            user_type: UserRole::Chef,
            ..Default::default()
        }
    }

    #[test]
    fn reconcile_requires_both_halves() {
        assert_eq!(reconcile(None, None), (None, None));
        assert_eq!(reconcile(Some("t".to_string()), None), (None, None));
        assert_eq!(reconcile(None, Some(user())), (None, None));

        let (token, hydrated) = reconcile(Some("t".to_string()), Some(user()));
        assert_eq!(token.as_deref(), Some("t"));
        assert_eq!(hydrated.unwrap().first_name, "Marco");
    }

    #[test]
    fn stored_user_format_round_trips() {
        let serialized = serde_json::to_string(&user()).unwrap();
        let parsed: User = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed, user());
    }

    #[test]
    fn corrupt_stored_user_is_rejected() {
        assert!(serde_json::from_str::<User>("{not json").is_err());
    }
}
