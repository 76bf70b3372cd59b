//! KeyHelp Provisioner
//!
//! Account-lifecycle adapter between a billing platform and the KeyHelp
//! hosting panel:
//! - Lifecycle Service: create / suspend / unsuspend / upgrade / terminate / password reset
//! - Plan Catalog Service: hosting plans as selectable options
//! - Presentation Service: service page descriptors, login data and usage
//!
//! The only durable state is the per-service property set, persisted by the
//! host through the [`PropertyStore`] trait.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use keyhelp_provisioner::{
//!     CheckoutInput, InMemoryPropertyStore, LifecycleService, ProductSettings, ServerConfig,
//!     ServiceContext, ServiceRef,
//! };
//!
//! let config = ServerConfig::new("https://panel.example.com", "api-key");
//! let ctx = Arc::new(ServiceContext::connect(config, Arc::new(InMemoryPropertyStore::new()))?);
//! let lifecycle = LifecycleService::new(ctx);
//!
//! let account = lifecycle
//!     .create(
//!         &ServiceRef::new(1001, "jane@example.com"),
//!         &ProductSettings::new(3),
//!         &CheckoutInput::with_domain("example.com"),
//!     )
//!     .await?;
//! ```

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{ProvisionError, ProvisionResult};
pub use services::{LifecycleService, PlanCatalogService, PresentationService, ServiceContext};
pub use traits::{FlashStore, InMemoryFlashStore, InMemoryPropertyStore, PanelApi, PropertyStore};
pub use types::{
    ActionDescriptor, ActionKind, CheckoutInput, CreatedAccount, Enrichment, ProductSettings,
    PropertyKey, ProvisioningStatus, ServerConfig, ServiceProperties, ServiceProperty, ServiceRef,
};
