//! Shared test tools and helper functions

#![allow(dead_code)]

use std::sync::Arc;

use keyhelp_client::API_BASE_PATH;
use keyhelp_provisioner::{
    InMemoryPropertyStore, PropertyKey, PropertyStore, ServerConfig, ServiceContext,
    ServiceProperty,
};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";
pub const SERVICE_ID: u64 = 1001;

/// Start a mock panel and a context wired to it with an empty property store.
pub async fn provisioner() -> (MockServer, Arc<ServiceContext>) {
    let server = MockServer::start().await;
    let ctx = context_for(ServerConfig::new(server.uri(), TEST_API_KEY));
    (server, ctx)
}

pub fn context_for(mut config: ServerConfig) -> Arc<ServiceContext> {
    config.request_timeout_secs = 2;
    let ctx = ServiceContext::connect(config, Arc::new(InMemoryPropertyStore::new()))
        .expect("failed to build context");
    Arc::new(ctx)
}

/// Record `client_id` (plus credentials) for [`SERVICE_ID`].
pub async fn provision(ctx: &ServiceContext, client_id: u64) {
    let values = [
        (PropertyKey::CLIENT_ID, client_id.to_string()),
        (PropertyKey::USERNAME, "jane1001".to_string()),
        (PropertyKey::PASSWORD, "Old-Pass-1234567".to_string()),
    ];
    for (key, value) in values {
        ctx.properties
            .upsert(SERVICE_ID, key, ServiceProperty::for_key(key, value))
            .await
            .expect("failed to seed properties");
    }
}

/// Path of an endpoint under the pinned API prefix.
pub fn api(endpoint: &str) -> String {
    format!("{API_BASE_PATH}{endpoint}")
}
