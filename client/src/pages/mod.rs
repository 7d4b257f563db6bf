//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (which collections to load, form
//! state, which mutation a button triggers) and delegates rendering details
//! to `components`. Requests only run in the browser; server rendering emits
//! the loading shell.

pub mod activity;
pub mod categories;
pub mod disputes;
pub mod home;
pub mod login;
pub mod overview;
pub mod payouts;
pub mod services;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::resources::Entity;
use crate::state::resource::{ResourceHandle, use_api_client};

/// Run `task` on the browser's event loop. Server rendering drops it unpolled.
pub(crate) fn spawn_browser<F>(task: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "hydrate"))]
    drop(task);
}

/// The app's API client, parked in the reactive arena so handlers stay `Copy`.
pub(crate) fn stored_api_client() -> StoredValue<ApiClient> {
    StoredValue::new(use_api_client())
}

/// Kick off the initial list load for `handle`.
pub(crate) fn load_on_mount<T: Entity>(handle: ResourceHandle<T>, api: StoredValue<ApiClient>) {
    let client = api.get_value();
    spawn_browser(async move { handle.fetch_all(&client).await });
}

/// Blank form fields become `None`.
pub(crate) fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
