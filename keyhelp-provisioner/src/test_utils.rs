//! Test helper module
//!
//! Provides a recording mock of the panel and convenient factory methods.

use std::sync::Arc;

use async_trait::async_trait;
use keyhelp_client::{
    ClientError, ClientStats, ClientUpdate, CreatedResource, HostingPlan, NewClient, NewDomain,
    PanelApi, PlanResources, Result, ServerConfig,
};
use tokio::sync::RwLock;

use crate::error::{ProvisionError, ProvisionResult};
use crate::services::ServiceContext;
use crate::traits::{InMemoryFlashStore, InMemoryPropertyStore, PropertyStore};
use crate::types::{PropertyKey, ServiceProperties, ServiceProperty};

pub const TEST_HOST: &str = "https://panel.test";

// ===== MockPanelApi =====

/// A call received by [`MockPanelApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelCall {
    ServerInfo,
    ListHostingPlans,
    CreateClient(NewClient),
    UpdateClient(u64, ClientUpdate),
    DeleteClient(u64),
    CreateDomain(NewDomain),
    ClientStats(u64),
    LoginUrl(u64),
}

pub struct MockPanelApi {
    calls: RwLock<Vec<PanelCall>>,
    plans: RwLock<Vec<HostingPlan>>,
    created_id: RwLock<Option<u64>>,
    stats: RwLock<ClientStats>,
    login_url: RwLock<Option<String>>,
    /// Returned by the next call only
    fail_next: RwLock<Option<ClientError>>,
    /// Returned by every call
    fail_always: RwLock<Option<ClientError>>,
    /// Returned by `create_domain` only
    fail_domains: RwLock<Option<ClientError>>,
}

impl MockPanelApi {
    pub fn new() -> Self {
        Self {
            calls: RwLock::new(Vec::new()),
            plans: RwLock::new(Vec::new()),
            created_id: RwLock::new(Some(1)),
            stats: RwLock::new(ClientStats::default()),
            login_url: RwLock::new(None),
            fail_next: RwLock::new(None),
            fail_always: RwLock::new(None),
            fail_domains: RwLock::new(None),
        }
    }

    pub async fn set_plans(&self, plans: Vec<HostingPlan>) {
        *self.plans.write().await = plans;
    }

    /// Id returned by `create_client`; `None` simulates a malformed response.
    pub async fn set_created_id(&self, id: Option<u64>) {
        *self.created_id.write().await = id;
    }

    pub async fn set_stats(&self, stats: ClientStats) {
        *self.stats.write().await = stats;
    }

    pub async fn set_login_url(&self, url: Option<String>) {
        *self.login_url.write().await = url;
    }

    pub async fn fail_next(&self, err: ClientError) {
        *self.fail_next.write().await = Some(err);
    }

    pub async fn fail_always(&self, err: ClientError) {
        *self.fail_always.write().await = Some(err);
    }

    pub async fn fail_domains(&self, err: ClientError) {
        *self.fail_domains.write().await = Some(err);
    }

    pub async fn calls(&self) -> Vec<PanelCall> {
        self.calls.read().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }

    /// Record `call` and return the configured failure, if any.
    async fn record(&self, call: PanelCall) -> Result<()> {
        self.calls.write().await.push(call);
        if let Some(err) = self.fail_next.write().await.take() {
            return Err(err);
        }
        match self.fail_always.read().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PanelApi for MockPanelApi {
    async fn server_info(&self) -> Result<serde_json::Value> {
        self.record(PanelCall::ServerInfo).await?;
        Ok(serde_json::json!({ "meta": { "version": "test" } }))
    }

    async fn list_hosting_plans(&self) -> Result<Vec<HostingPlan>> {
        self.record(PanelCall::ListHostingPlans).await?;
        Ok(self.plans.read().await.clone())
    }

    async fn create_client(&self, client: &NewClient) -> Result<CreatedResource> {
        self.record(PanelCall::CreateClient(client.clone())).await?;
        Ok(CreatedResource {
            id: *self.created_id.read().await,
        })
    }

    async fn update_client(&self, client_id: u64, update: &ClientUpdate) -> Result<()> {
        self.record(PanelCall::UpdateClient(client_id, update.clone()))
            .await
    }

    async fn delete_client(&self, client_id: u64) -> Result<()> {
        self.record(PanelCall::DeleteClient(client_id)).await
    }

    async fn create_domain(&self, domain: &NewDomain) -> Result<CreatedResource> {
        self.record(PanelCall::CreateDomain(domain.clone())).await?;
        if let Some(err) = self.fail_domains.read().await.clone() {
            return Err(err);
        }
        Ok(CreatedResource { id: Some(100) })
    }

    async fn client_stats(&self, client_id: u64) -> Result<ClientStats> {
        self.record(PanelCall::ClientStats(client_id)).await?;
        Ok(self.stats.read().await.clone())
    }

    async fn login_url(&self, client_id: u64) -> Result<Option<String>> {
        self.record(PanelCall::LoginUrl(client_id)).await?;
        Ok(self.login_url.read().await.clone())
    }
}

// ===== MockPropertyStore =====

/// In-memory store whose writes to one key can be made to fail.
#[derive(Default)]
pub struct MockPropertyStore {
    inner: InMemoryPropertyStore,
    upsert_error_key: RwLock<Option<String>>,
}

impl MockPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every `upsert` of `key`; other keys are stored normally.
    pub async fn set_upsert_error(&self, key: &str) {
        *self.upsert_error_key.write().await = Some(key.to_string());
    }
}

#[async_trait]
impl PropertyStore for MockPropertyStore {
    async fn load(&self, service_id: u64) -> ProvisionResult<ServiceProperties> {
        self.inner.load(service_id).await
    }

    async fn upsert(
        &self,
        service_id: u64,
        key: &str,
        property: ServiceProperty,
    ) -> ProvisionResult<()> {
        if self.upsert_error_key.read().await.as_deref() == Some(key) {
            return Err(ProvisionError::Storage(format!("write of '{key}' rejected")));
        }
        self.inner.upsert(service_id, key, property).await
    }

    async fn remove(&self, service_id: u64, key: &str) -> ProvisionResult<()> {
        self.inner.remove(service_id, key).await
    }
}

// ===== Factory methods =====

/// Create a test `ServiceContext` around `panel` with in-memory stores
pub fn create_test_context(panel: Arc<MockPanelApi>) -> Arc<ServiceContext> {
    create_test_context_with_store(panel, Arc::new(InMemoryPropertyStore::new()))
}

/// Create a test `ServiceContext` around `panel` and a given property store
pub fn create_test_context_with_store(
    panel: Arc<MockPanelApi>,
    properties: Arc<dyn PropertyStore>,
) -> Arc<ServiceContext> {
    Arc::new(ServiceContext::new(
        panel,
        properties,
        Arc::new(InMemoryFlashStore::new()),
        Arc::new(ServerConfig::new(TEST_HOST, "test-api-key")),
    ))
}

/// Properties of a service provisioned as `client_id`
pub fn provisioned_properties(client_id: u64) -> ServiceProperties {
    [
        (PropertyKey::CLIENT_ID, client_id.to_string()),
        (PropertyKey::USERNAME, "jane0007".to_string()),
        (PropertyKey::PASSWORD, "Secr3t!pass".to_string()),
        (PropertyKey::DOMAIN, "example.com".to_string()),
    ]
    .into_iter()
    .collect()
}

pub fn plan(id: u64, name: &str, disk_space: i64) -> HostingPlan {
    HostingPlan {
        id,
        name: name.to_string(),
        resources: PlanResources { disk_space },
    }
}
