//! Configuration form schema handed to the host's form renderer

use serde::{Deserialize, Serialize};

/// Input type of a configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Plain text input.
    Text,
    /// Masked/password input.
    Password,
    /// Single choice from `options`.
    Select,
    Checkbox,
}

/// One selectable hosting plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanOption {
    pub id: u64,
    /// `"<name> (<disk quota>)"`
    pub label: String,
}

/// Definition of a single configuration field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigField {
    /// Machine-readable key (e.g., `"api_key"`).
    pub name: String,
    /// Human-readable label (e.g., `"API Key"`).
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Default value, serialized as the host expects it (`true` for checkboxes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    /// Choices of a [`FieldType::Select`] field.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub options: Vec<PlanOption>,
}

impl ConfigField {
    fn new(name: &str, label: &str, field_type: FieldType) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            field_type,
            required: false,
            description: None,
            placeholder: None,
            default: None,
            options: Vec::new(),
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    fn checked_by_default(mut self) -> Self {
        self.default = Some(serde_json::Value::Bool(true));
        self
    }

    fn options(mut self, options: Vec<PlanOption>) -> Self {
        self.options = options;
        self
    }
}

/// Server-level settings entered by the operator.
pub fn server_config_fields() -> Vec<ConfigField> {
    vec![
        ConfigField::new("host", "KeyHelp Hostname", FieldType::Text)
            .required()
            .describe("The hostname of your KeyHelp server (e.g., https://panel.example.com)"),
        ConfigField::new("api_key", "API Key", FieldType::Password)
            .required()
            .describe("API key from KeyHelp (Settings → API)"),
        ConfigField::new("system_url", "System URL (display)", FieldType::Text)
            .describe("Display URL for this server (e.g. vweb03.eu)"),
        ConfigField::new("ipv4_address", "IPv4 Address", FieldType::Text)
            .describe("Public IPv4 of this server"),
        ConfigField::new("ipv6_address", "IPv6 Address", FieldType::Text)
            .describe("Public IPv6 of this server"),
        ConfigField::new("server_location", "Server Location", FieldType::Text)
            .describe("Location (e.g. SkyLink, Eygelshoven)"),
        ConfigField::new("ddos_protection", "DDoS Protection", FieldType::Text)
            .describe("DDoS protection description (e.g. inkl DDoS Protection)"),
    ]
}

/// Per-product settings; `plans` fills the hosting plan select.
pub fn product_config_fields(plans: Vec<PlanOption>) -> Vec<ConfigField> {
    vec![
        ConfigField::new("id_hosting_plan", "Hosting Plan", FieldType::Select)
            .required()
            .describe("Select a hosting plan from KeyHelp")
            .options(plans),
        ConfigField::new("create_system_domain", "Create System Domain", FieldType::Checkbox)
            .checked_by_default()
            .describe("Create a system subdomain for the account"),
        ConfigField::new("send_login_credentials", "Send Login Email", FieldType::Checkbox)
            .checked_by_default()
            .describe("Email login credentials to the customer via KeyHelp"),
    ]
}

/// Customer-facing checkout fields.
pub fn checkout_config_fields() -> Vec<ConfigField> {
    vec![
        ConfigField::new("domain", "Domain", FieldType::Text)
            .required()
            .placeholder("example.com")
            .describe("Your domain name for this hosting account"),
    ]
}
