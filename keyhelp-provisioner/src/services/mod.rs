//! Business logic service layer

pub mod credentials;
mod lifecycle;
mod plan_catalog;
mod presentation;

pub use lifecycle::LifecycleService;
pub use plan_catalog::PlanCatalogService;
pub use presentation::PresentationService;

use std::sync::Arc;

use keyhelp_client::{KeyhelpClient, PanelApi, ServerConfig};

use crate::error::{ProvisionError, ProvisionResult};
use crate::traits::{FlashStore, InMemoryFlashStore, PropertyStore};
use crate::types::{ProvisioningStatus, ServiceProperties};

/// Service context - holds all dependencies
///
/// The host builds one context per configured KeyHelp server and injects its
/// own property store.
pub struct ServiceContext {
    /// Remote panel
    pub panel: Arc<dyn PanelApi>,
    /// Service property persistence
    pub properties: Arc<dyn PropertyStore>,
    /// One-time channel for freshly reset passwords
    pub flash: Arc<dyn FlashStore>,
    /// Server configuration (display attributes and login fallback)
    pub config: Arc<ServerConfig>,
}

impl ServiceContext {
    #[must_use]
    pub fn new(
        panel: Arc<dyn PanelApi>,
        properties: Arc<dyn PropertyStore>,
        flash: Arc<dyn FlashStore>,
        config: Arc<ServerConfig>,
    ) -> Self {
        Self {
            panel,
            properties,
            flash,
            config,
        }
    }

    /// Context talking to a real panel over HTTP, with an in-memory flash store.
    pub fn connect(
        config: ServerConfig,
        properties: Arc<dyn PropertyStore>,
    ) -> ProvisionResult<Self> {
        let panel = KeyhelpClient::new(config.clone())?;
        Ok(Self::new(
            Arc::new(panel),
            properties,
            Arc::new(InMemoryFlashStore::new()),
            Arc::new(config),
        ))
    }

    /// Load the properties of a service together with its remote client id.
    ///
    /// Fails with [`ProvisionError::NotProvisioned`] before any remote call
    /// when no client id is recorded.
    pub async fn provisioned(&self, service_id: u64) -> ProvisionResult<(u64, ServiceProperties)> {
        let properties = self.properties.load(service_id).await?;
        match properties.status() {
            ProvisioningStatus::Provisioned { client_id } => Ok((client_id, properties)),
            ProvisioningStatus::Unprovisioned => Err(ProvisionError::NotProvisioned),
        }
    }

    /// Remote client id of a service, see [`provisioned`](Self::provisioned).
    pub async fn client_id(&self, service_id: u64) -> ProvisionResult<u64> {
        self.provisioned(service_id).await.map(|(id, _)| id)
    }
}
