use serde::{Deserialize, Serialize};

/// Error type for every call made through [`KeyhelpClient`](crate::KeyhelpClient).
///
/// [`NotConfigured`](Self::NotConfigured) is an operator problem and is raised
/// before any request leaves the process. Every other variant means the panel
/// could not be reached or refused the request, and is surfaced verbatim.
///
/// No variant is retried by the client. A transient failure propagates on the
/// first attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// `host` or `api_key` is missing from the server configuration.
    NotConfigured {
        /// Configuration key that is missing or blank.
        field: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, TLS, etc.).
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The panel answered with a non-success status.
    Api {
        /// HTTP status code.
        status: u16,
        /// The panel's `message` field when present, else the raw body.
        message: String,
    },

    /// A success response could not be decoded into the expected shape.
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ClientError {
    /// `true` when the error comes from local configuration rather than the panel.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::NotConfigured { .. })
    }

    /// HTTP status of an [`Api`](Self::Api) error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotConfigured { field } => {
                write!(f, "KeyHelp server not properly configured: missing {field}")
            }
            Self::Network { detail } => write!(f, "KeyHelp API Error: {detail}"),
            Self::Timeout { detail } => write!(f, "KeyHelp API Error: request timed out: {detail}"),
            Self::Api { message, .. } => write!(f, "KeyHelp API Error: {message}"),
            Self::Parse { detail } => {
                write!(f, "KeyHelp API Error: unexpected response: {detail}")
            }
            Self::Serialization { detail } => {
                write!(f, "KeyHelp API Error: cannot encode request: {detail}")
            }
        }
    }
}

impl std::error::Error for ClientError {}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
