//! Type definition module

mod presentation;
mod property;
mod schema;
mod settings;

pub use presentation::{ActionDescriptor, ActionKind, Enrichment, LoginView, ResetView};
pub use property::{PropertyKey, ProvisioningStatus, ServiceProperties, ServiceProperty};
pub use schema::{
    ConfigField, FieldType, PlanOption, checkout_config_fields, product_config_fields,
    server_config_fields,
};
pub use settings::{CheckoutInput, CreatedAccount, ProductSettings, ServiceRef, is_valid_domain};

// Re-export client types used in the public API
pub use keyhelp_client::{ServerConfig, UsageValue};
