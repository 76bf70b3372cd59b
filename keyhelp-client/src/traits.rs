use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ClientStats, ClientUpdate, CreatedResource, HostingPlan, NewClient, NewDomain};

/// Typed operations of the KeyHelp panel used by the provisioning adapter.
///
/// [`KeyhelpClient`](crate::KeyhelpClient) is the HTTP implementation; the
/// trait exists so the orchestration layer can be driven without a panel.
#[async_trait]
pub trait PanelApi: Send + Sync {
    /// `GET /server`: connectivity and credential check.
    async fn server_info(&self) -> Result<serde_json::Value>;

    /// `GET /hosting-plans`
    async fn list_hosting_plans(&self) -> Result<Vec<HostingPlan>>;

    /// `POST /clients`
    ///
    /// The response is returned as-is; callers must check that `id` is present.
    async fn create_client(&self, client: &NewClient) -> Result<CreatedResource>;

    /// `PUT /clients/{id}`
    async fn update_client(&self, client_id: u64, update: &ClientUpdate) -> Result<()>;

    /// `DELETE /clients/{id}`
    async fn delete_client(&self, client_id: u64) -> Result<()>;

    /// `POST /domains`
    async fn create_domain(&self, domain: &NewDomain) -> Result<CreatedResource>;

    /// `GET /clients/{id}/stats`
    async fn client_stats(&self, client_id: u64) -> Result<ClientStats>;

    /// `GET /login/{id}`: single-sign-on link, `None` if the panel returned no URL.
    async fn login_url(&self, client_id: u64) -> Result<Option<String>>;
}
