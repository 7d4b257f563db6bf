//! Per-collection REST contract shared by every resource hook.
//!
//! ARCHITECTURE
//! ============
//! [`Entity`] describes one backend collection (path, label, identity).
//! [`ResourceApi`] is the seam between resource state and transport:
//! `ApiClient` implements it over HTTP, tests implement it in memory.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api::ApiClient;
use super::error::ApiError;

/// A record type mirrored from one backend collection.
pub trait Entity: Clone + Debug + PartialEq + Send + Sync + DeserializeOwned + 'static {
    /// Create/update payload.
    type Input: Serialize;

    /// Collection path relative to the API base, e.g. `/services`.
    const COLLECTION: &'static str;

    /// Singular display name used in notifications.
    const LABEL: &'static str;

    fn id(&self) -> &str;

    fn created_at(&self) -> Option<&str> {
        None
    }

    /// Record a locally observed creation time. No-op for entities without one.
    fn set_created_at(&mut self, ts: String) {
        let _ = ts;
    }
}

/// Path of a single record within `T`'s collection.
pub fn item_path<T: Entity>(id: &str) -> String {
    format!("{}/{}", T::COLLECTION, id.trim_matches('/'))
}

/// List/create/update/delete against one collection.
#[allow(async_fn_in_trait)]
pub trait ResourceApi<T: Entity> {
    async fn list(&self) -> Result<Vec<T>, ApiError>;
    async fn create(&self, input: &T::Input) -> Result<T, ApiError>;
    async fn update(&self, id: &str, input: &T::Input) -> Result<T, ApiError>;
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

impl<T: Entity> ResourceApi<T> for ApiClient {
    async fn list(&self) -> Result<Vec<T>, ApiError> {
        self.get_json(T::COLLECTION).await
    }

    async fn create(&self, input: &T::Input) -> Result<T, ApiError> {
        self.post_json(T::COLLECTION, input).await
    }

    async fn update(&self, id: &str, input: &T::Input) -> Result<T, ApiError> {
        self.put_json(&item_path::<T>(id), input).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.delete_path(&item_path::<T>(id)).await
    }
}
