//! In-memory resource lists with fetch/create/update/delete orchestration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every portal page owns one `ResourceHandle` per collection it shows. Each
//! call to a `use_*` hook creates an independent list; two pages loading the
//! same collection do not share state and the last response wins locally.
//!
//! ERROR HANDLING
//! ==============
//! Failures are normalized once, stored as the handle's `error` and pushed as
//! an error toast. Mutations also return the `ApiError` so callers can keep a
//! form open. A failed call never touches the list, and nothing is retried.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::error::{ApiError, error_message};
use crate::net::resources::{Entity, ResourceApi};
use crate::net::types::{ActivityLog, Category, Dispute, Payout, Service};
use crate::state::toast::{ToastKind, ToastState, notify};
use crate::util::clock;

/// One collection's local copy plus request status.
#[derive(Clone, Debug)]
pub struct ResourceState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: false, error: None }
    }
}

impl<T: Entity> ResourceState<T> {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace the list wholesale, keeping the backend's order.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
    }

    /// Record a failure; the list is left as it was.
    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Newest-first: created items go to the front.
    pub fn prepend(&mut self, item: T) {
        self.items.insert(0, item);
        self.error = None;
    }

    /// Swap the item whose id is `id` in place. Returns whether one matched.
    pub fn replace(&mut self, id: &str, item: T) -> bool {
        self.error = None;
        match self.items.iter_mut().find(|existing| existing.id() == id) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Drop the item whose id is `id`. Returns whether one matched.
    pub fn remove(&mut self, id: &str) -> bool {
        self.error = None;
        let before = self.items.len();
        self.items.retain(|existing| existing.id() != id);
        self.items.len() != before
    }

    pub fn get_by_id(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }
}

/// Reactive handle over one collection.
pub struct ResourceHandle<T: Entity> {
    state: RwSignal<ResourceState<T>>,
    toasts: Option<RwSignal<ToastState>>,
}

impl<T: Entity> Clone for ResourceHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Entity> Copy for ResourceHandle<T> {}

impl<T: Entity> Default for ResourceHandle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> ResourceHandle<T> {
    /// Handle without notifications.
    pub fn new() -> Self {
        Self { state: RwSignal::new(ResourceState::default()), toasts: None }
    }

    pub fn with_toasts(toasts: RwSignal<ToastState>) -> Self {
        Self { toasts: Some(toasts), ..Self::new() }
    }

    pub fn state(&self) -> ReadSignal<ResourceState<T>> {
        self.state.read_only()
    }

    pub fn items(&self) -> Vec<T> {
        self.state.with(|s| s.items.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    /// Local lookup; never touches the network.
    pub fn get_by_id(&self, id: &str) -> Option<T> {
        self.state.with(|s| s.get_by_id(id).cloned())
    }

    pub async fn fetch_all(&self, api: &impl ResourceApi<T>) {
        self.state.update(ResourceState::begin_fetch);
        match api.list().await {
            Ok(items) => self.state.update(|s| s.replace_all(items)),
            Err(err) => self.surface(&err),
        }
    }

    /// Create via the backend and prepend the result.
    ///
    /// # Errors
    ///
    /// Returns the backend/transport error after surfacing it.
    pub async fn create(&self, api: &impl ResourceApi<T>, input: &T::Input) -> Result<T, ApiError> {
        match api.create(input).await {
            Ok(mut item) => {
                if item.created_at().is_none() {
                    if let Some(ts) = clock::now_rfc3339() {
                        item.set_created_at(ts);
                    }
                }
                let created = item.clone();
                self.state.update(|s| s.prepend(item));
                self.announce(ToastKind::Success, format!("{} created", T::LABEL));
                Ok(created)
            }
            Err(err) => {
                self.surface(&err);
                Err(err)
            }
        }
    }

    /// Update via the backend and replace the matching local item in place.
    /// Only a local match is announced.
    ///
    /// # Errors
    ///
    /// Returns the backend/transport error after surfacing it.
    pub async fn update(&self, api: &impl ResourceApi<T>, id: &str, input: &T::Input) -> Result<T, ApiError> {
        match api.update(id, input).await {
            Ok(item) => {
                let updated = item.clone();
                let mut matched = false;
                self.state.update(|s| matched = s.replace(id, item));
                if matched {
                    self.announce(ToastKind::Success, format!("{} updated", T::LABEL));
                } else {
                    leptos::logging::warn!("{} {id} updated but not in the local list", T::LABEL);
                }
                Ok(updated)
            }
            Err(err) => {
                self.surface(&err);
                Err(err)
            }
        }
    }

    /// Delete via the backend and drop the matching local item.
    ///
    /// # Errors
    ///
    /// Returns the backend/transport error after surfacing it.
    pub async fn delete(&self, api: &impl ResourceApi<T>, id: &str) -> Result<(), ApiError> {
        match api.delete(id).await {
            Ok(()) => {
                self.state.update(|s| {
                    s.remove(id);
                });
                self.announce(ToastKind::Success, format!("{} deleted", T::LABEL));
                Ok(())
            }
            Err(err) => {
                self.surface(&err);
                Err(err)
            }
        }
    }

    fn surface(&self, err: &ApiError) {
        leptos::logging::warn!("{} request failed: {err}", T::LABEL);
        let message = error_message(err);
        self.state.update(|s| s.fail(message.clone()));
        self.announce(ToastKind::Error, message);
    }

    fn announce(&self, kind: ToastKind, message: String) {
        if let Some(toasts) = self.toasts {
            notify(toasts, kind, message);
        }
    }
}

// =============================================================================
// HOOKS
// =============================================================================

/// REST client provided by `App`, or one built from configuration.
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_default()
}

/// Fresh handle for `T`, wired to the app's toast stack when present.
pub fn use_resource<T: Entity>() -> ResourceHandle<T> {
    use_context::<RwSignal<ToastState>>().map_or_else(ResourceHandle::new, ResourceHandle::with_toasts)
}

pub fn use_services() -> ResourceHandle<Service> {
    use_resource()
}

pub fn use_categories() -> ResourceHandle<Category> {
    use_resource()
}

pub fn use_disputes() -> ResourceHandle<Dispute> {
    use_resource()
}

pub fn use_payouts() -> ResourceHandle<Payout> {
    use_resource()
}

pub fn use_activity_logs() -> ResourceHandle<ActivityLog> {
    use_resource()
}
