//! Service property store abstraction Trait

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProvisionResult;
use crate::types::{ServiceProperties, ServiceProperty};

/// Service property store Trait
///
/// Implemented by the billing host on top of its own persistence. Each
/// `upsert`/`remove` is expected to be atomic for a single key; the adapter
/// performs no locking and writes multiple keys one after another.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// Load all properties of a service
    ///
    /// # Returns
    /// * An empty set when the service has never been provisioned
    async fn load(&self, service_id: u64) -> ProvisionResult<ServiceProperties>;

    /// Create or replace a single property
    ///
    /// # Arguments
    /// * `service_id` - Host-side service id
    /// * `key` - Property key, see [`PropertyKey`](crate::types::PropertyKey)
    /// * `property` - Display name and value
    async fn upsert(
        &self,
        service_id: u64,
        key: &str,
        property: ServiceProperty,
    ) -> ProvisionResult<()>;

    /// Delete a single property; deleting an absent key is not an error
    async fn remove(&self, service_id: u64, key: &str) -> ProvisionResult<()>;
}

/// In-memory property store
///
/// Default implementation, used by tests and embedders without persistence.
#[derive(Clone, Default)]
pub struct InMemoryPropertyStore {
    services: Arc<RwLock<HashMap<u64, ServiceProperties>>>,
}

impl InMemoryPropertyStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a service with existing properties.
    pub async fn insert(&self, service_id: u64, properties: ServiceProperties) {
        self.services.write().await.insert(service_id, properties);
    }
}

#[async_trait]
impl PropertyStore for InMemoryPropertyStore {
    async fn load(&self, service_id: u64) -> ProvisionResult<ServiceProperties> {
        Ok(self
            .services
            .read()
            .await
            .get(&service_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn upsert(
        &self,
        service_id: u64,
        key: &str,
        property: ServiceProperty,
    ) -> ProvisionResult<()> {
        self.services
            .write()
            .await
            .entry(service_id)
            .or_default()
            .upsert(key, property);
        Ok(())
    }

    async fn remove(&self, service_id: u64, key: &str) -> ProvisionResult<()> {
        if let Some(properties) = self.services.write().await.get_mut(&service_id) {
            properties.remove(key);
        }
        Ok(())
    }
}
