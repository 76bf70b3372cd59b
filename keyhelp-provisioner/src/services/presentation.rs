//! Service page presentation
//!
//! Builds the descriptors the host renders on a service page. Remote
//! lookups here are enrichment only: their failures are logged and replaced
//! by a fallback, never returned. Unprovisioned services skip them silently.

use std::sync::Arc;

use crate::error::ProvisionResult;
use crate::services::ServiceContext;
use crate::traits::RESET_PASSWORD_FLASH;
use crate::types::{
    ActionDescriptor, Enrichment, LoginView, PropertyKey, ResetView, ServiceProperties,
};
use crate::utils::format::{format_disk_usage, NOT_AVAILABLE};

const LOGIN_BUTTON_TEXT: &str = "Login to KeyHelp";

/// Presentation service
pub struct PresentationService {
    ctx: Arc<ServiceContext>,
}

impl PresentationService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Ordered descriptors for the service page.
    ///
    /// Only a failing property store is an error; stats and login link
    /// lookups fall back to `"N/A"` and the configured host.
    pub async fn actions(&self, service_id: u64) -> ProvisionResult<Vec<ActionDescriptor>> {
        let properties = self.ctx.properties.load(service_id).await?;
        let disk_usage = self
            .fetch_disk_usage(&properties)
            .await
            .value_or_else(|reason| {
                if let Some(reason) = reason {
                    log::warn!("[keyhelp] Disk usage unavailable for service {service_id}: {reason}");
                }
                NOT_AVAILABLE.to_string()
            });
        let login_url = self.resolve_login_url(service_id, &properties).await;

        let config = &self.ctx.config;
        let display = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(NOT_AVAILABLE)
                .to_string()
        };

        Ok(vec![
            ActionDescriptor::view("login_data", "Login Data", "getLoginView"),
            ActionDescriptor::text(
                "domain",
                "Domain",
                properties.get(PropertyKey::DOMAIN).unwrap_or(NOT_AVAILABLE),
            ),
            ActionDescriptor::text("system_url", "URL", display(&config.system_url)),
            ActionDescriptor::text("ipv4_address", "IPv4 Address", display(&config.ipv4_address)),
            ActionDescriptor::text("ipv6_address", "IPv6 Address", display(&config.ipv6_address)),
            ActionDescriptor::text(
                "server_location",
                "Server Location",
                display(&config.server_location),
            ),
            ActionDescriptor::text(
                "ddos_protection",
                "DDoS Protection",
                display(&config.ddos_protection),
            ),
            ActionDescriptor::text("disk_usage", "Disk Usage", disk_usage),
            ActionDescriptor::link("login_panel", LOGIN_BUTTON_TEXT, LOGIN_BUTTON_TEXT, login_url),
            ActionDescriptor::view("client_reset_password", "Password Reset", "getClientResetView"),
            ActionDescriptor::callback(
                "client_reset_password_action",
                "Password Reset Action",
                "Hidden",
                "clientResetPassword",
            ),
        ])
    }

    /// Disk usage line of a service, e.g. `"1.5 GB / 10 GB (15%)"`.
    ///
    /// [`Enrichment::Skipped`] when the service has no panel account.
    pub async fn disk_usage(&self, service_id: u64) -> ProvisionResult<Enrichment<String>> {
        let properties = self.ctx.properties.load(service_id).await?;
        Ok(self.fetch_disk_usage(&properties).await)
    }

    /// Single-sign-on link into the panel.
    pub async fn login_url(&self, service_id: u64) -> ProvisionResult<Enrichment<String>> {
        let properties = self.ctx.properties.load(service_id).await?;
        Ok(self.fetch_login_url(&properties).await)
    }

    /// Body of the "Login Data" tab. Consumes a pending reset password.
    pub async fn login_view(&self, service_id: u64) -> ProvisionResult<LoginView> {
        let properties = self.ctx.properties.load(service_id).await?;
        let reset_password = self.ctx.flash.take(service_id, RESET_PASSWORD_FLASH).await;

        Ok(LoginView {
            username: properties
                .get(PropertyKey::USERNAME)
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
            password: properties
                .get(PropertyKey::PASSWORD)
                .unwrap_or_default()
                .to_string(),
            reset_password,
        })
    }

    /// Body of the "Password Reset" tab.
    #[must_use]
    pub fn reset_view() -> ResetView {
        ResetView {
            message: "Click the button below to generate a new password for your KeyHelp account. \
                      After the reset, the new password will appear in the Login Data tab."
                .to_string(),
            button: "Reset Password".to_string(),
            action: "clientResetPassword".to_string(),
        }
    }

    async fn fetch_disk_usage(&self, properties: &ServiceProperties) -> Enrichment<String> {
        let Some(client_id) = properties.status().client_id() else {
            return Enrichment::Skipped;
        };
        match self.ctx.panel.client_stats(client_id).await {
            Ok(stats) => Enrichment::Ok(format_disk_usage(stats.disk_space.as_ref())),
            Err(e) => Enrichment::Degraded(e.to_string()),
        }
    }

    async fn fetch_login_url(&self, properties: &ServiceProperties) -> Enrichment<String> {
        let Some(client_id) = properties.status().client_id() else {
            return Enrichment::Skipped;
        };
        match self.ctx.panel.login_url(client_id).await {
            Ok(Some(url)) => Enrichment::Ok(url),
            Ok(None) => Enrichment::Degraded("panel returned no login URL".to_string()),
            Err(e) => Enrichment::Degraded(e.to_string()),
        }
    }

    /// Login link, or the configured host when no link can be fetched.
    async fn resolve_login_url(&self, service_id: u64, properties: &ServiceProperties) -> String {
        self.fetch_login_url(properties)
            .await
            .value_or_else(|reason| {
                if let Some(reason) = reason {
                    log::warn!("[keyhelp] Login link unavailable for service {service_id}: {reason}");
                }
                self.ctx.config.host.clone()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_context, provisioned_properties, MockPanelApi, PanelCall};
    use crate::types::ActionKind;
    use keyhelp_client::{ClientError, ClientStats, UsageValue};

    const GIB: i64 = 1_073_741_824;

    async fn setup(
        client_id: Option<u64>,
    ) -> (Arc<MockPanelApi>, Arc<ServiceContext>, PresentationService) {
        let panel = Arc::new(MockPanelApi::new());
        let ctx = create_test_context(panel.clone());
        if let Some(id) = client_id {
            for (key, property) in provisioned_properties(id).iter() {
                ctx.properties.upsert(7, key, property.clone()).await.unwrap();
            }
        }
        (panel, ctx.clone(), PresentationService::new(ctx))
    }

    fn text_of<'a>(actions: &'a [ActionDescriptor], name: &str) -> &'a str {
        actions
            .iter()
            .find(|a| a.name == name)
            .and_then(ActionDescriptor::text_value)
            .unwrap()
    }

    #[tokio::test]
    async fn actions_are_ordered() {
        let (_panel, _ctx, service) = setup(Some(42)).await;

        let names: Vec<String> = service
            .actions(7)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(
            names,
            [
                "login_data",
                "domain",
                "system_url",
                "ipv4_address",
                "ipv6_address",
                "server_location",
                "ddos_protection",
                "disk_usage",
                "login_panel",
                "client_reset_password",
                "client_reset_password_action",
            ]
        );
    }

    #[tokio::test]
    async fn actions_show_stats_and_login_link() {
        let (panel, _ctx, service) = setup(Some(42)).await;
        panel
            .set_stats(ClientStats {
                disk_space: Some(UsageValue {
                    value: Some(GIB),
                    max: Some(4 * GIB),
                }),
            })
            .await;
        panel
            .set_login_url(Some("https://panel.test/sso/abc".into()))
            .await;

        let actions = service.actions(7).await.unwrap();
        assert_eq!(text_of(&actions, "disk_usage"), "1 GB / 4 GB (25%)");
        assert_eq!(text_of(&actions, "domain"), "example.com");
        let login = actions.iter().find(|a| a.name == "login_panel").unwrap();
        assert_eq!(login.url(), Some("https://panel.test/sso/abc"));
        assert!(panel.calls().await.contains(&PanelCall::ClientStats(42)));
    }

    #[tokio::test]
    async fn enrichment_failures_degrade() {
        let (panel, _ctx, service) = setup(Some(42)).await;
        panel
            .fail_always(ClientError::Timeout {
                detail: "slow panel".into(),
            })
            .await;

        let actions = service.actions(7).await.unwrap();
        assert_eq!(text_of(&actions, "disk_usage"), "N/A");
        let login = actions.iter().find(|a| a.name == "login_panel").unwrap();
        assert_eq!(login.url(), Some("https://panel.test"));
    }

    #[tokio::test]
    async fn unprovisioned_service_renders_without_remote_calls() {
        let (panel, _ctx, service) = setup(None).await;

        let actions = service.actions(7).await.unwrap();
        assert_eq!(text_of(&actions, "domain"), "N/A");
        assert_eq!(text_of(&actions, "disk_usage"), "N/A");
        assert_eq!(text_of(&actions, "system_url"), "N/A");
        assert_eq!(panel.call_count().await, 0);
    }

    #[tokio::test]
    async fn reset_action_calls_back() {
        let (_panel, _ctx, service) = setup(Some(1)).await;

        let actions = service.actions(7).await.unwrap();
        let reset = actions.last().unwrap();
        assert_eq!(
            reset.kind,
            ActionKind::Button {
                text: "Hidden".into(),
                url: None,
                function: Some("clientResetPassword".into()),
            }
        );
        assert_eq!(PresentationService::reset_view().action, "clientResetPassword");
    }

    #[tokio::test]
    async fn login_view_shows_flashed_password_once() {
        let (_panel, ctx, service) = setup(Some(42)).await;
        ctx.flash
            .flash(7, RESET_PASSWORD_FLASH, "N3w-pass".into())
            .await;

        let first = service.login_view(7).await.unwrap();
        assert_eq!(first.username, "jane0007");
        assert_eq!(first.password, "Secr3t!pass");
        assert_eq!(first.reset_password.as_deref(), Some("N3w-pass"));

        let second = service.login_view(7).await.unwrap();
        assert_eq!(second.reset_password, None);
    }

    #[tokio::test]
    async fn login_url_reports_missing_link() {
        let (panel, _ctx, service) = setup(Some(42)).await;
        panel.set_login_url(None).await;

        assert!(service.login_url(7).await.unwrap().is_degraded());
    }

    #[tokio::test]
    async fn unprovisioned_lookups_are_skipped_not_degraded() {
        let (panel, _ctx, service) = setup(None).await;

        assert_eq!(service.disk_usage(7).await.unwrap(), Enrichment::Skipped);
        assert_eq!(service.login_url(7).await.unwrap(), Enrichment::Skipped);
        assert_eq!(panel.call_count().await, 0);

        let actions = service.actions(7).await.unwrap();
        let login = actions.iter().find(|a| a.name == "login_panel").unwrap();
        assert_eq!(login.url(), Some("https://panel.test"));
    }
}
