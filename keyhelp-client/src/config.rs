//! Server configuration
//!
//! Per-deployment settings entered by the operator on the billing host. Only
//! `host` and `api_key` are needed to talk to the panel; the remaining fields
//! are display values echoed back to customers.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Pinned API prefix. v1 and v2 use different response envelopes; only v2 is spoken here.
pub const API_BASE_PATH: &str = "/api/v2";

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Validation error for a flat key/value server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ConfigError {
    /// A required field is missing entirely.
    MissingField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A required field is present but empty/whitespace-only.
    EmptyField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
}

impl ConfigError {
    /// Field key the error refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field, .. } | Self::EmptyField { field, .. } => field,
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { label, .. } => write!(f, "Missing required field: {label}"),
            Self::EmptyField { label, .. } => write!(f, "Field must not be empty: {label}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for ClientError {
    fn from(e: ConfigError) -> Self {
        Self::NotConfigured {
            field: e.field().to_string(),
        }
    }
}

/// Connection and display settings for one KeyHelp server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the panel, e.g. `https://panel.example.com`.
    pub host: String,
    /// Value sent in the `X-API-Key` header.
    pub api_key: String,
    /// Display URL for this server (e.g. `vweb03.eu`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_location: Option<String>,
    /// Free-text DDoS protection note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ddos_protection: Option<String>,
    /// Skip TLS certificate verification. Panels commonly run on self-signed certificates.
    #[serde(default = "default_accept_invalid_certs")]
    pub accept_invalid_certs: bool,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_accept_invalid_certs() -> bool {
    true
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl ServerConfig {
    /// Config with only the connection fields set.
    pub fn new(host: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            api_key: api_key.into(),
            system_url: None,
            ipv4_address: None,
            ipv6_address: None,
            server_location: None,
            ddos_protection: None,
            accept_invalid_certs: default_accept_invalid_certs(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    /// Build a config from the host's flat settings map.
    ///
    /// `host` and `api_key` are required; display fields that are blank are
    /// treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required field is missing or empty.
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut config = Self::new(
            get_required_field(map, "host", "KeyHelp Hostname")?,
            get_required_field(map, "api_key", "API Key")?,
        );
        config.system_url = get_optional_field(map, "system_url");
        config.ipv4_address = get_optional_field(map, "ipv4_address");
        config.ipv6_address = get_optional_field(map, "ipv6_address");
        config.server_location = get_optional_field(map, "server_location");
        config.ddos_protection = get_optional_field(map, "ddos_protection");
        if let Some(flag) = get_optional_field(map, "accept_invalid_certs") {
            config.accept_invalid_certs = matches!(flag.as_str(), "1" | "true" | "on" | "yes");
        }
        Ok(config)
    }

    /// Check the connection fields before a request is attempted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyField {
                field: "host".to_string(),
                label: "KeyHelp Hostname".to_string(),
            });
        }
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::EmptyField {
                field: "api_key".to_string(),
                label: "API Key".to_string(),
            });
        }
        Ok(())
    }

    /// `host` without trailing slashes, followed by [`API_BASE_PATH`].
    pub fn base_url(&self) -> String {
        format!("{}{API_BASE_PATH}", self.host.trim().trim_end_matches('/'))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn get_required_field(
    map: &HashMap<String, String>,
    key: &str,
    label: &str,
) -> Result<String, ConfigError> {
    match map.get(key) {
        None => Err(ConfigError::MissingField {
            field: key.to_string(),
            label: label.to_string(),
        }),
        Some(v) if v.trim().is_empty() => Err(ConfigError::EmptyField {
            field: key.to_string(),
            label: label.to_string(),
        }),
        Some(v) => Ok(v.trim().to_string()),
    }
}

fn get_optional_field(map: &HashMap<String, String>, key: &str) -> Option<String> {
    map.get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}
