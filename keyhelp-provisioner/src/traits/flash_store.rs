//! One-time value channel Trait

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Key under which a freshly reset password is flashed.
pub const RESET_PASSWORD_FLASH: &str = "keyhelp_password_reset";

/// Flash store Trait
///
/// Holds a value until it is read once, like a session flash message on the
/// host. Used to show a reset password in the next response only.
#[async_trait]
pub trait FlashStore: Send + Sync {
    /// Store `value`, replacing any unread value under the same key
    async fn flash(&self, service_id: u64, key: &str, value: String);

    /// Take the value out; a second call returns `None`
    async fn take(&self, service_id: u64, key: &str) -> Option<String>;
}

/// In-memory flash store
#[derive(Clone, Default)]
pub struct InMemoryFlashStore {
    values: Arc<RwLock<HashMap<(u64, String), String>>>,
}

impl InMemoryFlashStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FlashStore for InMemoryFlashStore {
    async fn flash(&self, service_id: u64, key: &str, value: String) {
        self.values
            .write()
            .await
            .insert((service_id, key.to_string()), value);
    }

    async fn take(&self, service_id: u64, key: &str) -> Option<String> {
        self.values
            .write()
            .await
            .remove(&(service_id, key.to_string()))
    }
}
