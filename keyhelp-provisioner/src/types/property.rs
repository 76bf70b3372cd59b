//! Service property types
//!
//! Service properties are the only durable state the adapter owns. The host
//! persists them as `key -> {name, value}` rows; see
//! [`PropertyStore`](crate::traits::PropertyStore).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Keys written by the adapter.
pub struct PropertyKey;

impl PropertyKey {
    /// Remote account identifier. Its presence is what marks a service as provisioned.
    pub const CLIENT_ID: &'static str = "keyhelp_client_id";
    pub const USERNAME: &'static str = "username";
    pub const PASSWORD: &'static str = "password";
    /// Set only once the domain was registered on the panel.
    pub const DOMAIN: &'static str = "domain";

    /// Display name the host shows next to a key.
    pub fn display_name(key: &str) -> &'static str {
        match key {
            Self::CLIENT_ID => "KeyHelp Client ID",
            Self::USERNAME => "Username",
            Self::PASSWORD => "Password",
            Self::DOMAIN => "Domain",
            _ => "",
        }
    }
}

/// One persisted property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceProperty {
    /// Human-readable name (`name` column on the host).
    #[serde(rename = "name")]
    pub display_name: String,
    pub value: String,
}

impl ServiceProperty {
    pub fn new(display_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            value: value.into(),
        }
    }

    /// Property for one of the [`PropertyKey`] keys, with its standard display name.
    pub fn for_key(key: &str, value: impl Into<String>) -> Self {
        Self::new(PropertyKey::display_name(key), value)
    }
}

/// All properties of one service, keyed by property key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceProperties(BTreeMap<String, ServiceProperty>);

impl ServiceProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `key`, `None` when unset or blank.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(|p| p.value.as_str())
            .filter(|v| !v.trim().is_empty())
    }

    pub fn get_property(&self, key: &str) -> Option<&ServiceProperty> {
        self.0.get(key)
    }

    /// Create-or-replace `key`.
    pub fn upsert(&mut self, key: impl Into<String>, property: ServiceProperty) {
        self.0.insert(key.into(), property);
    }

    pub fn remove(&mut self, key: &str) -> Option<ServiceProperty> {
        self.0.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ServiceProperty)> {
        self.0.iter()
    }

    /// Provisioning status derived from the recorded client id.
    pub fn status(&self) -> ProvisioningStatus {
        ProvisioningStatus::from_properties(self)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ServiceProperties {
    /// Build from `key -> value` pairs using the standard display names.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (key, value) in iter {
            let key = key.into();
            let property = ServiceProperty::for_key(&key, value);
            props.upsert(key, property);
        }
        props
    }
}

/// Provisioning state of a service.
///
/// Not persisted on its own: a service is provisioned exactly when a
/// parseable `keyhelp_client_id` is recorded. Suspension lives on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ProvisioningStatus {
    Unprovisioned,
    Provisioned { client_id: u64 },
}

impl ProvisioningStatus {
    pub fn from_properties(properties: &ServiceProperties) -> Self {
        properties
            .get(PropertyKey::CLIENT_ID)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map_or(Self::Unprovisioned, |client_id| Self::Provisioned {
                client_id,
            })
    }

    pub fn client_id(self) -> Option<u64> {
        match self {
            Self::Provisioned { client_id } => Some(client_id),
            Self::Unprovisioned => None,
        }
    }

    pub fn is_provisioned(self) -> bool {
        matches!(self, Self::Provisioned { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_id_marks_provisioned() {
        let props: ServiceProperties = [(PropertyKey::CLIENT_ID, "42")].into_iter().collect();
        assert_eq!(
            props.status(),
            ProvisioningStatus::Provisioned { client_id: 42 }
        );
        assert_eq!(props.status().client_id(), Some(42));
    }

    #[test]
    fn missing_or_blank_client_id_is_unprovisioned() {
        assert_eq!(
            ServiceProperties::new().status(),
            ProvisioningStatus::Unprovisioned
        );
        let props: ServiceProperties = [(PropertyKey::CLIENT_ID, " ")].into_iter().collect();
        assert!(!props.status().is_provisioned());
    }

    #[test]
    fn non_numeric_client_id_is_unprovisioned() {
        let props: ServiceProperties = [(PropertyKey::CLIENT_ID, "abc")].into_iter().collect();
        assert_eq!(props.status(), ProvisioningStatus::Unprovisioned);
    }

    #[test]
    fn from_iter_uses_display_names() {
        let props: ServiceProperties = [(PropertyKey::USERNAME, "john0042")].into_iter().collect();
        assert_eq!(
            props.get_property(PropertyKey::USERNAME),
            Some(&ServiceProperty::new("Username", "john0042"))
        );
    }

    #[test]
    fn serializes_as_host_rows() {
        let props: ServiceProperties = [(PropertyKey::DOMAIN, "example.com")].into_iter().collect();
        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"domain": {"name": "Domain", "value": "example.com"}})
        );
    }
}
