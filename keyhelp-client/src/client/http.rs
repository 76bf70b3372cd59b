//! KeyHelp HTTP 请求方法

use reqwest::header::ACCEPT;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::http_client::HttpUtils;
use crate::types::HttpMethod;
use crate::utils::log_sanitizer::redact_body;

use super::KeyhelpClient;

const API_KEY_HEADER: &str = "X-API-Key";

impl KeyhelpClient {
    /// Issue one authenticated call and return the decoded JSON body.
    ///
    /// `endpoint` is relative to the pinned API prefix, e.g. `/clients/42`.
    /// An empty success body yields `Value::Null`.
    pub async fn request(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<Value> {
        self.send(method, endpoint, body).await
    }

    /// Typed variant of [`request`](Self::request).
    pub(crate) async fn send<T, B>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.config.validate()?;

        let url = format!("{}{endpoint}", self.config.base_url());
        let mut builder = self
            .client
            .request(method.into(), &url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(ACCEPT, "application/json");

        if let Some(body) = body {
            let json = serde_json::to_value(body).map_err(|e| ClientError::Serialization {
                detail: e.to_string(),
            })?;
            log::debug!("[keyhelp] Request Body: {}", redact_body(&json));
            builder = builder.json(&json);
        }

        let (_, response_text) = HttpUtils::execute_request(builder, method, endpoint).await?;
        HttpUtils::parse_json(&response_text)
    }
}
