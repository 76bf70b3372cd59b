//! KeyHelp HTTP client

mod api;
mod http;

use reqwest::Client;

use crate::config::ServerConfig;
use crate::error::{ClientError, Result};

/// HTTP implementation of [`PanelApi`](crate::PanelApi).
///
/// Holds one connection pool per server configuration. Authentication is the
/// static `X-API-Key` header; there is no session to refresh.
pub struct KeyhelpClient {
    pub(crate) client: Client,
    pub(crate) config: ServerConfig,
}

impl KeyhelpClient {
    /// Build a client for `config`.
    ///
    /// A config with an empty `host` or `api_key` is accepted here; every call
    /// made through the client fails with [`ClientError::NotConfigured`] until
    /// it is fixed.
    pub fn new(config: ServerConfig) -> Result<Self> {
        if config.accept_invalid_certs {
            log::debug!("[keyhelp] TLS certificate verification disabled for {}", config.host);
        }

        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| ClientError::Network {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
