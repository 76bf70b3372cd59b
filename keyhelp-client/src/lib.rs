//! # keyhelp-client
//!
//! Async client for the [KeyHelp](https://www.keyhelp.de/) hosting control
//! panel REST API, pinned to `/api/v2`.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for static builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use keyhelp_client::{ClientUpdate, KeyhelpClient, PanelApi, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = KeyhelpClient::new(ServerConfig::new("https://panel.example.com", "api-key"))?;
//!
//!     // Connectivity check
//!     client.server_info().await?;
//!
//!     for plan in client.list_hosting_plans().await? {
//!         println!("{} -> {}", plan.id, plan.name);
//!     }
//!
//!     // Suspend client 42
//!     client.update_client(42, &ClientUpdate::suspended(true)).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All calls return [`Result<T, ClientError>`](ClientError):
//!
//! - [`ClientError::NotConfigured`]: `host` or `api_key` is empty; no request was sent
//! - [`ClientError::Api`]: the panel answered with a non-success status
//! - [`ClientError::Network`] / [`ClientError::Timeout`]: the panel could not be reached
//!
//! Nothing is retried. TLS verification is disabled unless
//! [`ServerConfig::accept_invalid_certs`] is set to `false`.

mod client;
mod config;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::KeyhelpClient;
pub use config::{API_BASE_PATH, ConfigError, ServerConfig};
pub use error::{ClientError, Result};
pub use traits::PanelApi;
pub use types::{
    ClientStats, ClientUpdate, CreatedResource, HostingPlan, HttpMethod, LoginLink, NewClient,
    NewDomain, PlanResources, UNLIMITED, UsageValue,
};
pub use utils::log_sanitizer;
