//! Request and response bodies of the KeyHelp v2 API.

use serde::{Deserialize, Deserializer, Serialize};

/// HTTP verb of a panel call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// Sentinel the panel uses for "no limit" on plan resources.
pub const UNLIMITED: i64 = -1;

/// Entry of `GET /hosting-plans`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostingPlan {
    #[serde(deserialize_with = "lenient_u64")]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub resources: PlanResources,
}

/// Resource limits of a hosting plan. Only the fields the adapter reads are modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResources {
    /// Disk quota in bytes, [`UNLIMITED`] for no limit.
    #[serde(default, deserialize_with = "lenient_i64")]
    pub disk_space: i64,
}

/// Body of `POST /clients`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewClient {
    pub username: String,
    pub password: String,
    pub email: String,
    pub language: String,
    pub id_hosting_plan: u64,
    pub is_suspended: bool,
    pub send_login_credentials: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_system_domain: Option<bool>,
}

/// Partial body of `PUT /clients/{id}`. Unset fields are left untouched by the panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_suspended: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_hosting_plan: Option<u64>,
}

impl ClientUpdate {
    pub fn password(password: impl Into<String>) -> Self {
        Self {
            password: Some(password.into()),
            ..Self::default()
        }
    }

    pub fn suspended(is_suspended: bool) -> Self {
        Self {
            is_suspended: Some(is_suspended),
            ..Self::default()
        }
    }

    pub fn hosting_plan(id_hosting_plan: u64) -> Self {
        Self {
            id_hosting_plan: Some(id_hosting_plan),
            ..Self::default()
        }
    }
}

/// Body of `POST /domains`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDomain {
    pub id_user: u64,
    pub domain: String,
    pub target_type: String,
    pub ssl_enabled: bool,
    pub letsencrypt: bool,
}

impl NewDomain {
    /// Webspace-backed domain with a Let's Encrypt certificate.
    pub fn webspace(id_user: u64, domain: impl Into<String>) -> Self {
        Self {
            id_user,
            domain: domain.into(),
            target_type: "webspace".to_string(),
            ssl_enabled: true,
            letsencrypt: true,
        }
    }
}

/// Response of create calls. `id` is optional so that a malformed success can be detected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreatedResource {
    #[serde(default, deserialize_with = "lenient_opt_u64")]
    pub id: Option<u64>,
}

impl CreatedResource {
    /// Decode a create response. Anything that is not an object with a usable
    /// `id` yields `id: None` instead of a parse error.
    pub fn from_response(body: serde_json::Value) -> Self {
        serde_json::from_value(body).unwrap_or_default()
    }
}

/// `{ value, max }` pair used by the statistics endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageValue {
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub value: Option<i64>,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub max: Option<i64>,
}

/// Response of `GET /clients/{id}/stats`. Only disk usage is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClientStats {
    #[serde(default)]
    pub disk_space: Option<UsageValue>,
}

/// Response of `GET /login/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginLink {
    #[serde(default)]
    pub url: Option<String>,
}

// ============ lenient number decoding ============

/// The panel is not consistent about quoting numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    I64(i64),
    U64(u64),
    F64(f64),
    String(String),
}

impl NumberOrString {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn into_i64(self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(v),
            Self::U64(v) => i64::try_from(v).ok(),
            Self::F64(v) if v.is_finite() => Some(v as i64),
            Self::F64(_) => None,
            Self::String(s) => s.trim().parse::<i64>().ok(),
        }
    }
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    NumberOrString::deserialize(deserializer)?
        .into_i64()
        .ok_or_else(|| Error::custom("expected an integer"))
}

fn lenient_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<NumberOrString>::deserialize(deserializer)?.and_then(NumberOrString::into_i64))
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    NumberOrString::deserialize(deserializer)?
        .into_i64()
        .and_then(|v| u64::try_from(v).ok())
        .ok_or_else(|| Error::custom("expected a non-negative integer"))
}

fn lenient_opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<NumberOrString>::deserialize(deserializer)?
        .and_then(NumberOrString::into_i64)
        .and_then(|v| u64::try_from(v).ok()))
}
