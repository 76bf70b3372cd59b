//! Generic HTTP client tools
//!
//! Sending a request, logging it, and folding every failure into
//! [`ClientError`]. Exactly one attempt is made per call: the caller owns
//! retry policy, and the adapter built on top of this has none.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::types::HttpMethod;
use crate::utils::log_sanitizer::redact_text;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text of a success status.
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for any 2xx status
    /// * `Err(ClientError::Timeout | ClientError::Network)` when the request never completed
    /// * `Err(ClientError::Api)` for any other status, carrying the panel's message
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method: HttpMethod,
        endpoint: &str,
    ) -> Result<(u16, String), ClientError> {
        log::debug!("[keyhelp] {method} {endpoint}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ClientError::Network {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        let status_code = status.as_u16();
        log::debug!("[keyhelp] Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| ClientError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!("[keyhelp] Response Body: {}", redact_text(&response_text));

        if !status.is_success() {
            let message = Self::extract_error_message(&response_text);
            log::warn!("[keyhelp] {method} {endpoint} failed (HTTP {status_code}): {message}");
            return Err(ClientError::Api {
                status: status_code,
                message,
            });
        }

        Ok((status_code, response_text))
    }

    /// The panel's `message` field when the body is a JSON object carrying one,
    /// else the raw body.
    pub fn extract_error_message(body: &str) -> String {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .and_then(serde_json::Value::as_str)
                    .map(ToString::to_string)
            })
            .unwrap_or_else(|| body.to_string())
    }

    /// Parse JSON response
    ///
    /// An empty body decodes as JSON `null`, so endpoints that answer `204`
    /// can be parsed into `serde_json::Value` or `Option<T>`.
    pub fn parse_json<T>(response_text: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let text = if response_text.trim().is_empty() {
            "null"
        } else {
            response_text
        };
        serde_json::from_str(text).map_err(|e| {
            log::error!("[keyhelp] JSON parse failed: {e}");
            log::error!("[keyhelp] Raw response: {}", redact_text(text));
            ClientError::Parse {
                detail: e.to_string(),
            }
        })
    }
}
