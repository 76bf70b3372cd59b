//! Display descriptors rendered by the host on the service page

use serde::{Deserialize, Serialize};

/// What the host renders for one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActionKind {
    /// Static label/value line.
    Text { text: String },
    /// Link button (`url`) or a button that calls back into the adapter (`function`).
    Button {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        function: Option<String>,
    },
    /// Tab whose body is produced by calling `function`.
    View { function: String },
}

/// One entry of the service page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    pub name: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: ActionKind,
}

impl ActionDescriptor {
    pub fn text(name: &str, label: &str, text: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: ActionKind::Text { text: text.into() },
        }
    }

    pub fn link(name: &str, label: &str, text: &str, url: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: ActionKind::Button {
                text: text.to_string(),
                url: Some(url.into()),
                function: None,
            },
        }
    }

    pub fn callback(name: &str, label: &str, text: &str, function: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: ActionKind::Button {
                text: text.to_string(),
                url: None,
                function: Some(function.to_string()),
            },
        }
    }

    pub fn view(name: &str, label: &str, function: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: ActionKind::View {
                function: function.to_string(),
            },
        }
    }

    /// Text of a `Text` or `Button` entry.
    pub fn text_value(&self) -> Option<&str> {
        match &self.kind {
            ActionKind::Text { text } | ActionKind::Button { text, .. } => Some(text),
            ActionKind::View { .. } => None,
        }
    }

    /// Target URL of a link button.
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            ActionKind::Button { url, .. } => url.as_deref(),
            _ => None,
        }
    }
}

/// Outcome of a read-only enrichment call.
///
/// Enrichment failures never abort a page; the caller picks the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enrichment<T> {
    Ok(T),
    /// The value could not be fetched; `reason` is logged, not shown.
    Degraded(String),
    /// Nothing to fetch, e.g. the service has no panel account yet.
    Skipped,
}

impl<T> Enrichment<T> {
    pub fn value_or(self, fallback: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Degraded(_) | Self::Skipped => fallback,
        }
    }

    /// The value, or `fallback` called with the failure reason
    /// (`None` when the lookup was skipped).
    pub fn value_or_else(self, fallback: impl FnOnce(Option<&str>) -> T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Degraded(reason) => fallback(Some(&reason)),
            Self::Skipped => fallback(None),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded(_))
    }
}

/// Body of the "Login Data" tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginView {
    pub username: String,
    /// Stored password, revealed on demand by the host's widget.
    pub password: String,
    /// Password generated by the last reset, present once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_password: Option<String>,
}

/// Body of the "Password Reset" tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetView {
    pub message: String,
    pub button: String,
    /// Adapter function the reset button triggers.
    pub action: String,
}
