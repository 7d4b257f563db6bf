//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. `AuthContext` is the only
//! writer; every consumer reads the same signal, so a transition is seen by
//! all of them in the same reactive pass.
//!
//! DESIGN
//! ======
//! `AuthUser` is never stored. It is re-derived from the session token's
//! claims on every read, so the token stays the single source of truth.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::AuthApi;
use crate::net::error::{ApiError, error_message};
use crate::net::types::{LoginRequest, LoginResponse};
use crate::util::clock;
use crate::util::session_storage::SessionStore;
use crate::util::token::{self, Claims};

pub const INVALID_TOKEN_MESSAGE: &str = "The server returned an invalid session token.";
pub const SESSION_NOT_SAVED_MESSAGE: &str =
    "Signed in, but this browser could not save the session. Check that site storage is enabled and try again.";

/// Identity view derived from token claims.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Option<String>,
}

/// A decodable, unexpired token held by this tab.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    token: String,
    claims: Claims,
}

impl Session {
    /// Accept `token` only if it decodes and is not expired at `now_ms`.
    pub fn from_token(token: &str, now_ms: i64) -> Option<Self> {
        let claims = token::decode(token)?;
        if claims.is_expired_at(now_ms) {
            return None;
        }
        Some(Self { token: token.to_owned(), claims })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        self.claims.is_expired_at(now_ms)
    }

    pub fn role(&self) -> Option<String> {
        self.claims.role()
    }

    pub fn user(&self) -> AuthUser {
        let email = self.claims.email().unwrap_or_default();
        let name = self.claims.name().unwrap_or_else(|| display_name_from_email(&email));
        AuthUser { id: self.claims.user_id().unwrap_or_default(), email, name, role: self.role() }
    }
}

fn display_name_from_email(email: &str) -> String {
    match email.split('@').next() {
        Some(local) if !local.is_empty() => local.to_owned(),
        _ => "User".to_owned(),
    }
}

/// Authentication state machine.
///
/// Starts as `Authenticating` so server rendering and the first hydrated
/// frame show the loading placeholder until [`AuthContext::restore`] runs.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AuthState {
    Unauthenticated,
    #[default]
    Authenticating,
    Authenticated(Session),
    Error(String),
}

impl AuthState {
    /// Resume from a persisted token, clearing it if it is stale or corrupt.
    pub fn restore(store: &impl SessionStore, now_ms: i64) -> Self {
        let Some(token) = store.load() else {
            return Self::Unauthenticated;
        };
        if let Some(session) = Session::from_token(&token, now_ms) {
            leptos::logging::log!("session restored");
            Self::Authenticated(session)
        } else {
            store.clear();
            Self::Unauthenticated
        }
    }

    pub fn begin_login(&mut self) {
        *self = Self::Authenticating;
    }

    /// Apply a login response. The store is written only for a usable token,
    /// and the session starts only once that write succeeded.
    pub fn complete_login(&mut self, result: Result<LoginResponse, ApiError>, store: &impl SessionStore, now_ms: i64) {
        *self = match result {
            Ok(resp) => match Session::from_token(&resp.token, now_ms) {
                Some(session) => match store.save(session.token()) {
                    Ok(()) => Self::Authenticated(session),
                    Err(err) => {
                        leptos::logging::warn!("login token not persisted: {err}");
                        Self::Error(SESSION_NOT_SAVED_MESSAGE.to_owned())
                    }
                },
                None => {
                    leptos::logging::warn!("login returned an unusable token");
                    Self::Error(INVALID_TOKEN_MESSAGE.to_owned())
                }
            },
            Err(err) => {
                leptos::logging::warn!("login failed: {err}");
                Self::Error(error_message(&err))
            }
        };
    }

    pub fn logout(&mut self, store: &impl SessionStore) {
        store.clear();
        *self = Self::Unauthenticated;
    }

    /// Destroy the session if its token expired or vanished from storage.
    ///
    /// Returns `true` when the session was destroyed.
    pub fn revalidate(&mut self, store: &impl SessionStore, now_ms: i64) -> bool {
        let Self::Authenticated(session) = self else {
            return false;
        };
        let still_stored = store.load().as_deref() == Some(session.token());
        if still_stored && !session.is_expired_at(now_ms) {
            return false;
        }
        leptos::logging::log!("session ended (expired or cleared)");
        self.logout(store);
        true
    }

    /// Error -> Unauthenticated, e.g. once the user edits the login form.
    pub fn clear_error(&mut self) {
        if matches!(self, Self::Error(_)) {
            *self = Self::Unauthenticated;
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Authenticating)
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.session().map(Session::user)
    }

    pub fn role(&self) -> Option<String> {
        self.session().and_then(Session::role)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Tab-wide auth provider handed out through Leptos context.
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthContext {
    pub fn new() -> Self {
        Self { state: RwSignal::new(AuthState::default()) }
    }

    /// Read-only view for consumers.
    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(AuthState::is_loading)
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.state.with(AuthState::user)
    }

    pub fn role(&self) -> Option<String> {
        self.state.with(AuthState::role)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error().map(str::to_owned))
    }

    pub fn restore(&self, store: &impl SessionStore) {
        self.state.set(AuthState::restore(store, clock::now_ms()));
    }

    /// Log in against `api`. Returns whether the tab is now authenticated.
    pub async fn login(&self, api: &impl AuthApi, store: &impl SessionStore, credentials: LoginRequest) -> bool {
        self.state.update(AuthState::begin_login);
        let result = api.login(&credentials).await;
        let now = clock::now_ms();
        self.state.update(|s| s.complete_login(result, store, now));
        self.state.with_untracked(AuthState::is_authenticated)
    }

    pub fn logout(&self, store: &impl SessionStore) {
        self.state.update(|s| s.logout(store));
    }

    pub fn revalidate(&self, store: &impl SessionStore) -> bool {
        let now = clock::now_ms();
        let mut ended = false;
        self.state.update(|s| ended = s.revalidate(store, now));
        ended
    }

    pub fn clear_error(&self) {
        if self.state.with_untracked(|s| s.error().is_some()) {
            self.state.update(AuthState::clear_error);
        }
    }
}

/// The auth provider installed by `App`.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
