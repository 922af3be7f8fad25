use std::sync::Arc;

use tracing::{error, info};

use crate::core::{AppError, Result};
use crate::modules::billing::models::{
    ActivationOutcome, PlanStatus, PlanSummary, SubscriptionDetails,
};
use crate::modules::gateway::{BillingProvider, LinkDescription};

/// Service for the recurring-billing catalog: products, plans, subscriptions
pub struct BillingService {
    provider: Arc<dyn BillingProvider>,
}

impl BillingService {
    pub fn new(provider: Arc<dyn BillingProvider>) -> Self {
        Self { provider }
    }

    /// Create a catalog product, passing the provider response through
    pub async fn create_product(&self) -> Result<serde_json::Value> {
        match self.provider.create_product().await {
            Ok(product) => {
                info!(provider = %self.provider.name(), "Product created");
                Ok(product)
            }
            Err(e) => {
                error!(provider = %self.provider.name(), error = %e, "Failed to create product");
                Err(e)
            }
        }
    }

    /// Create a monthly plan for a product, then re-fetch it to report the
    /// pricing attributes the provider settled on.
    pub async fn create_plan(&self, product_id: &str) -> Result<PlanSummary> {
        if product_id.trim().is_empty() {
            return Err(AppError::validation("product_id must not be empty"));
        }

        let plan_id = self.provider.create_plan(product_id).await?;
        let details = self.provider.fetch_plan(&plan_id).await?;

        info!(
            provider = %self.provider.name(),
            product_id = %product_id,
            plan_id = %details.id,
            "Plan created"
        );

        Ok(PlanSummary {
            id: details.id,
            name: details.name,
            interval_unit: details.interval_unit,
            value: details.value,
            currency_code: details.currency_code,
        })
    }

    /// Activate a plan.
    ///
    /// ACTIVE plans are left alone (idempotent); CREATED and INACTIVE plans
    /// get an activation call; any other reported status is an error.
    pub async fn activate_plan(&self, plan_id: &str) -> Result<ActivationOutcome> {
        if plan_id.trim().is_empty() {
            return Err(AppError::validation("plan_id must not be empty"));
        }

        let details = self.provider.fetch_plan(plan_id).await?;
        let status: PlanStatus = details.status.parse().map_err(|_| {
            AppError::provider(format!(
                "Plan {} is in unexpected state {}",
                plan_id, details.status
            ))
        })?;

        match status {
            PlanStatus::Active => {
                info!(plan_id = %plan_id, "Plan already active, skipping activation");
                Ok(ActivationOutcome::AlreadyActive)
            }
            PlanStatus::Created | PlanStatus::Inactive => {
                self.provider.activate_plan(plan_id).await?;
                info!(plan_id = %plan_id, previous_status = %status, "Plan activated");
                Ok(ActivationOutcome::Activated)
            }
        }
    }

    /// Enroll a subscriber in a plan and extract the approval links.
    ///
    /// A response without an approve link is an error: the buyer could never
    /// complete such a subscription.
    pub async fn create_subscription(&self, plan_id: &str) -> Result<SubscriptionDetails> {
        if plan_id.trim().is_empty() {
            return Err(AppError::validation("plan_id must not be empty"));
        }

        let subscription = self.provider.create_subscription(plan_id).await?;

        let approve_link = find_link(&subscription.links, "approve").ok_or_else(|| {
            error!(
                subscription_id = %subscription.id,
                "Subscription response did not include an approve link"
            );
            AppError::provider(format!(
                "Subscription {} response did not include an approve link",
                subscription.id
            ))
        })?;
        let cancel_link = find_link(&subscription.links, "cancel");

        info!(
            provider = %self.provider.name(),
            plan_id = %plan_id,
            subscription_id = %subscription.id,
            status = %subscription.status,
            "Subscription created"
        );

        Ok(SubscriptionDetails {
            id: subscription.id,
            status: subscription.status,
            approve_link,
            cancel_link,
        })
    }
}

fn find_link(links: &[LinkDescription], rel: &str) -> Option<String> {
    links
        .iter()
        .find(|link| link.rel == rel)
        .map(|link| link.href.clone())
}
