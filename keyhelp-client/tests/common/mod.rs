//! 共享测试工具和辅助函数

#![allow(dead_code)]

use keyhelp_client::{KeyhelpClient, ServerConfig};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";

/// Start a mock panel and a client pointed at it.
pub async fn panel() -> (MockServer, KeyhelpClient) {
    let server = MockServer::start().await;
    let client = client_for(&server.uri(), TEST_API_KEY);
    (server, client)
}

/// Build a client for an arbitrary host/key pair.
pub fn client_for(host: &str, api_key: &str) -> KeyhelpClient {
    let mut config = ServerConfig::new(host, api_key);
    config.request_timeout_secs = 2;
    KeyhelpClient::new(config).expect("failed to build client")
}

/// Path of an endpoint under the pinned API prefix.
pub fn api(endpoint: &str) -> String {
    format!("{}{endpoint}", keyhelp_client::API_BASE_PATH)
}
