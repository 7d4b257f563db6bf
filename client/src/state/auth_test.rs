use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::util::session_storage::{MemorySessionStore, StorageError};

// =============================================================
// Helpers
// =============================================================

const NOW_MS: i64 = 1_700_000_000_000;
/// 2100-01-01, far enough ahead for tests that read the real clock.
const FAR_FUTURE_SECS: i64 = 4_102_444_800;

fn make_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.sig")
}

fn admin_token(exp: i64) -> String {
    make_token(&serde_json::json!({
        "sub": "u1",
        "email": "dana@homefix.test",
        "name": "Dana Ops",
        "role": "ADMIN",
        "exp": exp,
    }))
}

fn expired_token() -> String {
    admin_token(NOW_MS / 1000 - 60)
}

fn credentials() -> LoginRequest {
    LoginRequest { email: "dana@homefix.test".to_owned(), password: "correct horse".to_owned() }
}

struct FakeAuthApi {
    result: Result<LoginResponse, ApiError>,
}

impl AuthApi for FakeAuthApi {
    async fn login(&self, _credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.result.clone()
    }
}

/// Store whose writes always fail, like quota-exhausted or disabled storage.
#[derive(Default)]
struct ReadOnlyStore {
    inner: MemorySessionStore,
}

impl SessionStore for ReadOnlyStore {
    fn save(&self, _token: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("QuotaExceededError".to_owned()))
    }

    fn load(&self) -> Option<String> {
        self.inner.load()
    }

    fn clear(&self) {
        self.inner.clear();
    }
}

fn accepting(token: String) -> FakeAuthApi {
    FakeAuthApi { result: Ok(LoginResponse { token }) }
}

fn rejecting(message: &str) -> FakeAuthApi {
    FakeAuthApi { result: Err(ApiError::Status { status: 401, message: Some(message.to_owned()) }) }
}

// =============================================================
// Session / AuthUser
// =============================================================

#[test]
fn session_rejects_expired_and_malformed_tokens() {
    assert!(Session::from_token(&expired_token(), NOW_MS).is_none());
    assert!(Session::from_token("not-a-token", NOW_MS).is_none());
}

#[test]
fn user_is_derived_from_claims() {
    let session = Session::from_token(&admin_token(FAR_FUTURE_SECS), NOW_MS).unwrap();
    assert_eq!(
        session.user(),
        AuthUser {
            id: "u1".to_owned(),
            email: "dana@homefix.test".to_owned(),
            name: "Dana Ops".to_owned(),
            role: Some("ADMIN".to_owned()),
        }
    );
}

#[test]
fn user_name_falls_back_to_email_local_part() {
    let token = make_token(&serde_json::json!({"sub": "u2", "email": "sam@homefix.test", "exp": FAR_FUTURE_SECS}));
    let session = Session::from_token(&token, NOW_MS).unwrap();
    assert_eq!(session.user().name, "sam");
}

#[test]
fn user_name_falls_back_to_generic_label() {
    let token = make_token(&serde_json::json!({"sub": "u3", "exp": FAR_FUTURE_SECS}));
    let session = Session::from_token(&token, NOW_MS).unwrap();
    assert_eq!(session.user().name, "User");
    assert!(session.user().role.is_none());
}

// =============================================================
// AuthState transitions
// =============================================================

#[test]
fn default_state_is_authenticating() {
    let state = AuthState::default();
    assert!(state.is_loading());
    assert!(!state.is_authenticated());
}

#[test]
fn restore_without_token_is_unauthenticated() {
    let store = MemorySessionStore::default();
    assert_eq!(AuthState::restore(&store, NOW_MS), AuthState::Unauthenticated);
}

#[test]
fn restore_with_valid_token_is_authenticated() {
    let token = admin_token(FAR_FUTURE_SECS);
    let store = MemorySessionStore::with_token(token.clone());
    let state = AuthState::restore(&store, NOW_MS);
    assert!(state.is_authenticated());
    assert_eq!(state.role().as_deref(), Some("ADMIN"));
    assert_eq!(store.load(), Some(token));
}

#[test]
fn restore_with_expired_token_clears_storage() {
    let store = MemorySessionStore::with_token(expired_token());
    let state = AuthState::restore(&store, NOW_MS);
    assert_eq!(state, AuthState::Unauthenticated);
    assert!(store.load().is_none());
}

#[test]
fn restore_with_corrupt_token_clears_storage() {
    let store = MemorySessionStore::with_token("corrupt");
    assert_eq!(AuthState::restore(&store, NOW_MS), AuthState::Unauthenticated);
    assert!(store.load().is_none());
}

#[test]
fn complete_login_success_persists_token() {
    let token = admin_token(FAR_FUTURE_SECS);
    let store = MemorySessionStore::default();
    let mut state = AuthState::Unauthenticated;
    state.begin_login();
    assert!(state.is_loading());
    state.complete_login(Ok(LoginResponse { token: token.clone() }), &store, NOW_MS);
    assert!(state.is_authenticated());
    assert_eq!(store.load(), Some(token));
}

#[test]
fn complete_login_failure_keeps_prior_storage() {
    let prior = admin_token(FAR_FUTURE_SECS);
    let store = MemorySessionStore::with_token(prior.clone());
    let mut state = AuthState::restore(&store, NOW_MS);
    state.begin_login();
    state.complete_login(
        Err(ApiError::Status { status: 401, message: Some("Invalid credentials".to_owned()) }),
        &store,
        NOW_MS,
    );
    assert_eq!(state.error(), Some("Invalid credentials"));
    assert!(!state.is_authenticated());
    assert_eq!(store.load(), Some(prior));
}

#[test]
fn complete_login_normalizes_transport_errors() {
    let store = MemorySessionStore::default();
    let mut state = AuthState::Authenticating;
    state.complete_login(Err(ApiError::Network("offline".to_owned())), &store, NOW_MS);
    assert_eq!(state.error(), Some("Unable to reach the server. Check your connection and try again."));
}

#[test]
fn complete_login_with_expired_token_is_an_error() {
    let store = MemorySessionStore::default();
    let mut state = AuthState::Authenticating;
    state.complete_login(Ok(LoginResponse { token: expired_token() }), &store, NOW_MS);
    assert_eq!(state.error(), Some(INVALID_TOKEN_MESSAGE));
    assert!(store.load().is_none());
}

#[test]
fn complete_login_fails_when_token_cannot_be_persisted() {
    let store = ReadOnlyStore::default();
    let mut state = AuthState::Authenticating;
    state.complete_login(Ok(LoginResponse { token: admin_token(FAR_FUTURE_SECS) }), &store, NOW_MS);
    assert!(!state.is_authenticated());
    assert_eq!(state.error(), Some(SESSION_NOT_SAVED_MESSAGE));
    assert!(store.load().is_none());
    assert!(!state.revalidate(&store, NOW_MS));
}

#[test]
fn logout_always_clears() {
    let store = MemorySessionStore::with_token(admin_token(FAR_FUTURE_SECS));
    let mut state = AuthState::restore(&store, NOW_MS);
    state.logout(&store);
    assert_eq!(state, AuthState::Unauthenticated);
    assert!(store.load().is_none());

    let mut errored = AuthState::Error("boom".to_owned());
    errored.logout(&store);
    assert_eq!(errored, AuthState::Unauthenticated);
}

#[test]
fn revalidate_keeps_live_session() {
    let store = MemorySessionStore::with_token(admin_token(FAR_FUTURE_SECS));
    let mut state = AuthState::restore(&store, NOW_MS);
    assert!(!state.revalidate(&store, NOW_MS));
    assert!(state.is_authenticated());
}

#[test]
fn revalidate_ends_expired_session() {
    let exp_secs = NOW_MS / 1000 + 60;
    let store = MemorySessionStore::with_token(admin_token(exp_secs));
    let mut state = AuthState::restore(&store, NOW_MS);
    assert!(state.is_authenticated());
    assert!(state.revalidate(&store, (exp_secs + 1) * 1000));
    assert_eq!(state, AuthState::Unauthenticated);
    assert!(store.load().is_none());
}

#[test]
fn revalidate_ends_session_cleared_externally() {
    let store = MemorySessionStore::with_token(admin_token(FAR_FUTURE_SECS));
    let mut state = AuthState::restore(&store, NOW_MS);
    store.clear();
    assert!(state.revalidate(&store, NOW_MS));
    assert!(!state.is_authenticated());
}

#[test]
fn revalidate_ignores_non_authenticated_states() {
    let store = MemorySessionStore::default();
    let mut state = AuthState::Error("bad".to_owned());
    assert!(!state.revalidate(&store, NOW_MS));
    assert_eq!(state.error(), Some("bad"));
}

#[test]
fn clear_error_only_affects_error_state() {
    let mut state = AuthState::Error("bad".to_owned());
    state.clear_error();
    assert_eq!(state, AuthState::Unauthenticated);

    let mut loading = AuthState::Authenticating;
    loading.clear_error();
    assert!(loading.is_loading());
}

// =============================================================
// AuthContext
// =============================================================

#[test]
fn context_login_success_sets_role_and_persists() {
    let auth = AuthContext::new();
    let store = MemorySessionStore::default();
    let token = admin_token(FAR_FUTURE_SECS);
    let ok = futures::executor::block_on(auth.login(&accepting(token.clone()), &store, credentials()));
    assert!(ok);
    assert!(auth.is_authenticated());
    assert_eq!(auth.role().as_deref(), Some("ADMIN"));
    assert_eq!(store.load(), Some(token));
}

#[test]
fn context_login_with_unwritable_storage_reports_failure() {
    let auth = AuthContext::new();
    let store = ReadOnlyStore::default();
    let ok = futures::executor::block_on(auth.login(&accepting(admin_token(FAR_FUTURE_SECS)), &store, credentials()));
    assert!(!ok);
    assert!(!auth.is_authenticated());
    assert_eq!(auth.error().as_deref(), Some(SESSION_NOT_SAVED_MESSAGE));
}

#[test]
fn context_logout_after_login_clears_everything() {
    let auth = AuthContext::new();
    let store = MemorySessionStore::default();
    futures::executor::block_on(auth.login(&accepting(admin_token(FAR_FUTURE_SECS)), &store, credentials()));
    auth.logout(&store);
    assert!(!auth.is_authenticated());
    assert!(auth.role().is_none());
    assert!(store.load().is_none());
}

#[test]
fn context_login_failure_surfaces_message() {
    let auth = AuthContext::new();
    let store = MemorySessionStore::default();
    let ok = futures::executor::block_on(auth.login(&rejecting("Invalid email or password"), &store, credentials()));
    assert!(!ok);
    assert_eq!(auth.error().as_deref(), Some("Invalid email or password"));
    auth.clear_error();
    assert!(auth.error().is_none());
    assert!(!auth.is_loading());
}

#[test]
fn context_restore_with_expired_token_is_unauthenticated() {
    let auth = AuthContext::new();
    assert!(auth.is_loading());
    let store = MemorySessionStore::with_token(expired_token());
    auth.restore(&store);
    assert!(!auth.is_authenticated());
    assert!(!auth.is_loading());
    assert!(store.load().is_none());
}

#[test]
fn context_revalidate_detects_external_clear() {
    let auth = AuthContext::new();
    let store = MemorySessionStore::with_token(admin_token(FAR_FUTURE_SECS));
    auth.restore(&store);
    assert!(!auth.revalidate(&store));
    store.clear();
    assert!(auth.revalidate(&store));
    assert!(!auth.is_authenticated());
}

#[test]
fn context_state_is_shared_between_copies() {
    let auth = AuthContext::new();
    let reader = auth;
    let store = MemorySessionStore::with_token(admin_token(FAR_FUTURE_SECS));
    auth.restore(&store);
    assert!(reader.state().with_untracked(AuthState::is_authenticated));
}
