//! Account lifecycle service
//!
//! Drives create / suspend / unsuspend / upgrade / terminate / password reset
//! against the panel and reconciles the service properties afterwards.
//!
//! Every operation is a strictly sequential series of remote calls followed by
//! property writes. Writes across keys are not transactional: a failure after
//! the remote call succeeded leaves the panel ahead of the local record.

use std::sync::Arc;

use keyhelp_client::{ClientUpdate, NewClient, NewDomain};

use crate::error::{ProvisionError, ProvisionResult};
use crate::services::credentials::{generate_password, generate_username};
use crate::services::ServiceContext;
use crate::traits::RESET_PASSWORD_FLASH;
use crate::types::{
    CheckoutInput, CreatedAccount, ProductSettings, PropertyKey, ServiceProperty, ServiceRef,
};

/// Panel UI language for new accounts.
const ACCOUNT_LANGUAGE: &str = "en";

/// Account lifecycle service
pub struct LifecycleService {
    ctx: Arc<ServiceContext>,
}

impl LifecycleService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Check connectivity and credentials with `GET /server`.
    ///
    /// The error side is the message to show the operator as-is.
    pub async fn test_connection(&self) -> Result<(), String> {
        match self.ctx.panel.server_info().await {
            Ok(_) => {
                log::info!("[keyhelp] Connection test succeeded for {}", self.ctx.config.host);
                Ok(())
            }
            Err(e) => {
                let err = ProvisionError::from(e);
                log::warn!("[keyhelp] Connection test failed: {err}");
                Err(err.to_string())
            }
        }
    }

    /// Create the panel account for a service.
    ///
    /// Flow: validate domain -> `POST /clients` -> record id, username,
    /// password -> register the domain (best effort).
    ///
    /// A missing id in the create response is a [`ProvisionError::Provisioning`]
    /// and nothing is recorded. A failed domain registration, or a failed
    /// write of the `domain` property, is logged and leaves the property
    /// unset; the account stands.
    pub async fn create(
        &self,
        service: &ServiceRef,
        settings: &ProductSettings,
        checkout: &CheckoutInput,
    ) -> ProvisionResult<CreatedAccount> {
        checkout.validate()?;
        let existing = self.ctx.properties.load(service.id).await?;
        if let Some(client_id) = existing.status().client_id() {
            return Err(ProvisionError::InvalidInput(format!(
                "Service {} is already provisioned as KeyHelp client {client_id}",
                service.id
            )));
        }

        let username = generate_username(&service.email, service.id);
        let password = generate_password();
        let request = NewClient {
            username: username.clone(),
            password: password.clone(),
            email: service.email.clone(),
            language: ACCOUNT_LANGUAGE.to_string(),
            id_hosting_plan: settings.id_hosting_plan,
            is_suspended: false,
            send_login_credentials: settings.send_login_credentials,
            create_system_domain: Some(settings.create_system_domain),
        };

        log::info!(
            "[keyhelp] Creating account '{username}' on plan {} for service {}",
            settings.id_hosting_plan,
            service.id
        );
        let created = self
            .ctx
            .panel
            .create_client(&request)
            .await
            .map_err(|e| log_failure("create", ProvisionError::from(e)))?;
        let client_id = created.id.ok_or_else(|| {
            log_failure(
                "create",
                ProvisionError::Provisioning("No client ID returned".to_string()),
            )
        })?;

        self.record(service.id, PropertyKey::CLIENT_ID, client_id.to_string())
            .await?;
        self.record(service.id, PropertyKey::USERNAME, username.clone())
            .await?;
        self.record(service.id, PropertyKey::PASSWORD, password.clone())
            .await?;
        log::info!(
            "[keyhelp] Account '{username}' created as client {client_id} for service {}",
            service.id
        );

        let domain = match checkout.normalized_domain() {
            Some(domain) => self.register_domain(service.id, client_id, domain).await,
            None => None,
        };

        Ok(CreatedAccount {
            client_id,
            username,
            password,
            domain,
        })
    }

    /// Register `domain` for the new account; `None` when the panel refused it.
    ///
    /// Never fails: the account already exists on the panel and is recorded.
    async fn register_domain(
        &self,
        service_id: u64,
        client_id: u64,
        domain: String,
    ) -> Option<String> {
        if let Err(e) = self
            .ctx
            .panel
            .create_domain(&NewDomain::webspace(client_id, domain.clone()))
            .await
        {
            log::warn!(
                "[keyhelp] Domain '{domain}' could not be registered for client {client_id}: {e}"
            );
            return None;
        }
        log::info!("[keyhelp] Domain '{domain}' registered for client {client_id}");

        if let Err(e) = self
            .record(service_id, PropertyKey::DOMAIN, domain.clone())
            .await
        {
            log::warn!(
                "[keyhelp] Domain '{domain}' of client {client_id} could not be recorded for service {service_id}: {e}"
            );
        }
        Some(domain)
    }

    /// Suspend the panel account. No local state changes.
    pub async fn suspend(&self, service_id: u64) -> ProvisionResult<()> {
        self.set_suspended(service_id, true).await
    }

    /// Lift a suspension. No local state changes.
    pub async fn unsuspend(&self, service_id: u64) -> ProvisionResult<()> {
        self.set_suspended(service_id, false).await
    }

    async fn set_suspended(&self, service_id: u64, suspended: bool) -> ProvisionResult<()> {
        let op = if suspended { "suspend" } else { "unsuspend" };
        let client_id = self.require_client(op, service_id).await?;

        self.ctx
            .panel
            .update_client(client_id, &ClientUpdate::suspended(suspended))
            .await
            .map_err(|e| log_failure(op, ProvisionError::from(e)))?;

        log::info!("[keyhelp] Client {client_id} {op}ed (service {service_id})");
        Ok(())
    }

    /// Move the panel account to the currently configured plan.
    pub async fn upgrade(&self, service_id: u64, settings: &ProductSettings) -> ProvisionResult<()> {
        let client_id = self.require_client("upgrade", service_id).await?;

        self.ctx
            .panel
            .update_client(client_id, &ClientUpdate::hosting_plan(settings.id_hosting_plan))
            .await
            .map_err(|e| log_failure("upgrade", ProvisionError::from(e)))?;

        log::info!(
            "[keyhelp] Client {client_id} moved to plan {} (service {service_id})",
            settings.id_hosting_plan
        );
        Ok(())
    }

    /// Delete the panel account, then forget its client id.
    ///
    /// `username`, `password` and `domain` stay recorded.
    pub async fn terminate(&self, service_id: u64) -> ProvisionResult<()> {
        let client_id = self.require_client("terminate", service_id).await?;

        self.ctx
            .panel
            .delete_client(client_id)
            .await
            .map_err(|e| log_failure("terminate", ProvisionError::from(e)))?;
        self.ctx
            .properties
            .remove(service_id, PropertyKey::CLIENT_ID)
            .await?;

        log::info!("[keyhelp] Client {client_id} deleted (service {service_id})");
        Ok(())
    }

    /// Set a new random password on the panel and record it.
    ///
    /// The plaintext is also flashed for one-time display and returned.
    pub async fn reset_password(&self, service_id: u64) -> ProvisionResult<String> {
        let client_id = self.require_client("reset_password", service_id).await?;
        let password = generate_password();

        self.ctx
            .panel
            .update_client(client_id, &ClientUpdate::password(password.clone()))
            .await
            .map_err(|e| log_failure("reset_password", ProvisionError::from(e)))?;
        self.record(service_id, PropertyKey::PASSWORD, password.clone())
            .await?;
        self.ctx
            .flash
            .flash(service_id, RESET_PASSWORD_FLASH, password.clone())
            .await;

        log::info!("[keyhelp] Password reset for client {client_id} (service {service_id})");
        Ok(password)
    }

    async fn require_client(&self, op: &str, service_id: u64) -> ProvisionResult<u64> {
        self.ctx
            .client_id(service_id)
            .await
            .map_err(|e| log_failure(op, e))
    }

    async fn record(&self, service_id: u64, key: &str, value: String) -> ProvisionResult<()> {
        self.ctx
            .properties
            .upsert(service_id, key, ServiceProperty::for_key(key, value))
            .await
    }

}

/// Log a failed operation at a level matching its cause.
fn log_failure(op: &str, err: ProvisionError) -> ProvisionError {
    if err.is_expected() {
        log::warn!("[keyhelp] {op} failed: {err}");
    } else {
        log::error!("[keyhelp] {op} failed: {err}");
    }
    err
}
