//! Hosting plan catalog service

use std::sync::Arc;

use keyhelp_client::{HostingPlan, UNLIMITED};

use crate::services::ServiceContext;
use crate::types::{ConfigField, Enrichment, PlanOption, product_config_fields};
use crate::utils::format::{UNLIMITED_LABEL, format_bytes};

/// Hosting plan catalog service
///
/// Plans are fetched on every call; nothing is cached.
pub struct PlanCatalogService {
    ctx: Arc<ServiceContext>,
}

impl PlanCatalogService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Selectable plans in panel order.
    ///
    /// Empty when the panel cannot be reached or rejects the call, so the
    /// product form still renders.
    pub async fn list_plans(&self) -> Vec<PlanOption> {
        self.fetch_plans().await.value_or_else(|reason| {
            if let Some(reason) = reason {
                log::warn!("[keyhelp] Hosting plans unavailable: {reason}");
            }
            Vec::new()
        })
    }

    /// Product form fields with the current plan catalog.
    pub async fn product_config(&self) -> Vec<ConfigField> {
        product_config_fields(self.list_plans().await)
    }

    async fn fetch_plans(&self) -> Enrichment<Vec<PlanOption>> {
        match self.ctx.panel.list_hosting_plans().await {
            Ok(plans) => Enrichment::Ok(plans.iter().map(plan_option).collect()),
            Err(e) => Enrichment::Degraded(e.to_string()),
        }
    }
}

/// `"<name> (<disk quota>)"`, with `-1` shown as unlimited.
fn plan_option(plan: &HostingPlan) -> PlanOption {
    let disk = if plan.resources.disk_space == UNLIMITED {
        UNLIMITED_LABEL.to_string()
    } else {
        format_bytes(plan.resources.disk_space)
    };
    PlanOption {
        id: plan.id,
        label: format!("{} ({disk})", plan.name),
    }
}
