//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use keyhelp_client::ClientError;

/// Adapter-level error type returned to the billing host.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ProvisionError {
    /// `host` or `api_key` is not configured. Must be fixed by an operator.
    #[error("KeyHelp server not properly configured: {0}")]
    Configuration(String),

    /// The panel rejected the call or could not be reached.
    #[error("{0}")]
    RemoteApi(ClientError),

    /// The service has no recorded `keyhelp_client_id`.
    #[error("Service has not been provisioned")]
    NotProvisioned,

    /// The panel accepted the create call but returned no usable client id.
    #[error("Failed to create KeyHelp account: {0}")]
    Provisioning(String),

    /// Settings or checkout input rejected before any remote call.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The host's property store failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ProvisionError {
    /// Whether it is expected behavior (operator or customer input), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::NotProvisioned | Self::InvalidInput(_)
        )
    }
}

impl From<ClientError> for ProvisionError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::NotConfigured { field } => Self::Configuration(format!("missing {field}")),
            other => Self::RemoteApi(other),
        }
    }
}

/// Adapter Result type alias
pub type ProvisionResult<T> = std::result::Result<T, ProvisionError>;
