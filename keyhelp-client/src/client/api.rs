//! KeyHelp PanelApi trait 实现

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::traits::PanelApi;
use crate::types::{
    ClientStats, ClientUpdate, CreatedResource, HostingPlan, HttpMethod, LoginLink, NewClient,
    NewDomain,
};

use super::KeyhelpClient;

#[async_trait]
impl PanelApi for KeyhelpClient {
    async fn server_info(&self) -> Result<Value> {
        self.send(HttpMethod::Get, "/server", None::<&Value>).await
    }

    async fn list_hosting_plans(&self) -> Result<Vec<HostingPlan>> {
        self.send(HttpMethod::Get, "/hosting-plans", None::<&Value>)
            .await
    }

    async fn create_client(&self, client: &NewClient) -> Result<CreatedResource> {
        let created: Value = self.send(HttpMethod::Post, "/clients", Some(client)).await?;
        Ok(CreatedResource::from_response(created))
    }

    async fn update_client(&self, client_id: u64, update: &ClientUpdate) -> Result<()> {
        let _: Value = self
            .send(HttpMethod::Put, &format!("/clients/{client_id}"), Some(update))
            .await?;
        Ok(())
    }

    async fn delete_client(&self, client_id: u64) -> Result<()> {
        let _: Value = self
            .send(
                HttpMethod::Delete,
                &format!("/clients/{client_id}"),
                None::<&Value>,
            )
            .await?;
        Ok(())
    }

    async fn create_domain(&self, domain: &NewDomain) -> Result<CreatedResource> {
        let created: Value = self.send(HttpMethod::Post, "/domains", Some(domain)).await?;
        Ok(CreatedResource::from_response(created))
    }

    async fn client_stats(&self, client_id: u64) -> Result<ClientStats> {
        self.send(
            HttpMethod::Get,
            &format!("/clients/{client_id}/stats"),
            None::<&Value>,
        )
        .await
    }

    async fn login_url(&self, client_id: u64) -> Result<Option<String>> {
        let link: Option<LoginLink> = self
            .send(HttpMethod::Get, &format!("/login/{client_id}"), None::<&Value>)
            .await?;
        Ok(link
            .and_then(|l| l.url)
            .filter(|url| !url.trim().is_empty()))
    }
}
