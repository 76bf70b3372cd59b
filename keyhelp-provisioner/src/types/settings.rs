//! Per-product settings, checkout input and lifecycle results

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ProvisionError, ProvisionResult};

fn default_true() -> bool {
    true
}

/// Settings chosen when the product is set up on the billing host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSettings {
    /// Hosting plan assigned to new accounts and on upgrade.
    pub id_hosting_plan: u64,
    /// Let the panel email login credentials to the customer.
    #[serde(default = "default_true")]
    pub send_login_credentials: bool,
    /// Let the panel create its system subdomain for the account.
    #[serde(default = "default_true")]
    pub create_system_domain: bool,
}

impl ProductSettings {
    pub fn new(id_hosting_plan: u64) -> Self {
        Self {
            id_hosting_plan,
            send_login_credentials: true,
            create_system_domain: true,
        }
    }

    /// Build settings from the host's flat form values.
    ///
    /// Checkbox values accept `1/0`, `true/false`, `on/off` and `yes/no`;
    /// absent checkboxes keep their default of `true`.
    pub fn from_map(map: &HashMap<String, String>) -> ProvisionResult<Self> {
        let plan = map
            .get("id_hosting_plan")
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ProvisionError::InvalidInput("Hosting Plan is required".to_string()))?;
        let id_hosting_plan = plan.parse::<u64>().map_err(|_| {
            ProvisionError::InvalidInput(format!("Hosting Plan must be a plan id, got '{plan}'"))
        })?;

        Ok(Self {
            id_hosting_plan,
            send_login_credentials: parse_flag(map.get("send_login_credentials"), true),
            create_system_domain: parse_flag(map.get("create_system_domain"), true),
        })
    }
}

fn parse_flag(value: Option<&String>, default: bool) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("1" | "true" | "on" | "yes") => true,
        Some("0" | "false" | "off" | "no") => false,
        _ => default,
    }
}

/// Customer input collected at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutInput {
    #[serde(default)]
    pub domain: Option<String>,
}

impl CheckoutInput {
    pub fn with_domain(domain: impl Into<String>) -> Self {
        Self {
            domain: Some(domain.into()),
        }
    }

    /// Trimmed, lowercased domain, `None` when absent or blank.
    pub fn normalized_domain(&self) -> Option<String> {
        self.domain
            .as_deref()
            .map(|d| d.trim().trim_end_matches('.').to_ascii_lowercase())
            .filter(|d| !d.is_empty())
    }

    /// Reject a supplied domain that is not syntactically valid.
    pub fn validate(&self) -> ProvisionResult<()> {
        match self.normalized_domain() {
            Some(domain) if !is_valid_domain(&domain) => Err(ProvisionError::InvalidInput(
                format!("'{domain}' is not a valid domain name"),
            )),
            _ => Ok(()),
        }
    }
}

/// Syntactic domain check: at least two labels, each 1-63 chars of
/// `[a-z0-9-]` not starting or ending with `-`, total length at most 253,
/// and a top-level label that is not purely numeric.
pub fn is_valid_domain(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > 253 {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    let tld_ok = labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && !tld.chars().all(|c| c.is_ascii_digit()));
    labels_ok && tld_ok
}

/// The billing service being acted on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRef {
    /// Host-side service id; scopes properties and the generated username.
    pub id: u64,
    /// Billing email of the service owner.
    pub email: String,
}

impl ServiceRef {
    pub fn new(id: u64, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}

/// Result of a successful `create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedAccount {
    pub client_id: u64,
    pub username: String,
    pub password: String,
    /// Domain registered on the panel; `None` if none was supplied or registration failed.
    pub domain: Option<String>,
}
