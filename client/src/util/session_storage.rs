//! Browser-session token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds exactly one bearer token under one fixed key for the lifetime of the
//! browser session. `sessionStorage` is cleared when the tab/browser session
//! ends, so a session never outlives it. Expiry decisions live in
//! `util::token` and `state::auth`; this store only overwrites, reads and
//! clears.

#[cfg(test)]
#[path = "session_storage_test.rs"]
mod session_storage_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Storage key for the bearer token.
pub const SESSION_TOKEN_KEY: &str = "homefix.session.token";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("session storage is unavailable")]
    Unavailable,
    #[error("session storage write failed: {0}")]
    Write(String),
}

/// Overwrite-on-write storage for a single session token.
pub trait SessionStore {
    /// Persist `token`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when nothing was persisted.
    fn save(&self, token: &str) -> Result<(), StorageError>;
    fn load(&self) -> Option<String>;
    fn clear(&self);
}

/// `window.sessionStorage` in the browser; inert on the server.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

impl SessionStore for BrowserSessionStore {
    fn save(&self, token: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = session_storage() else {
                leptos::logging::warn!("sessionStorage unavailable; session token not saved");
                return Err(StorageError::Unavailable);
            };
            storage.set_item(SESSION_TOKEN_KEY, token).map_err(|e| {
                leptos::logging::warn!("sessionStorage write failed: {e:?}");
                StorageError::Write(format!("{e:?}"))
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(StorageError::Unavailable)
        }
    }

    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = session_storage()?.get_item(SESSION_TOKEN_KEY).ok().flatten()?;
            (!raw.is_empty()).then_some(raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = session_storage() else {
                leptos::logging::warn!("sessionStorage unavailable; nothing to clear");
                return;
            };
            if let Err(e) = storage.remove_item(SESSION_TOKEN_KEY) {
                leptos::logging::warn!("sessionStorage clear failed: {e:?}");
            }
        }
    }
}

/// In-memory store. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemorySessionStore {
    /// Store pre-seeded with `token`, as if left behind by an earlier page load.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { slot: Rc::new(RefCell::new(Some(token.into()))) }
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(token.to_owned());
        Ok(())
    }

    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}
