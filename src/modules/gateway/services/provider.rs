use crate::core::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Remote billing provider operations used by the request handlers.
///
/// `PayPalClient` implements this against the real REST API; tests substitute
/// an in-process double so no handler logic needs network access.
#[async_trait]
pub trait BillingProvider: Send + Sync {
    /// Create a fixed-amount order with capture intent
    async fn create_order(&self) -> Result<CreatedOrder>;

    /// Capture a previously created order
    async fn capture_order(&self, order_id: &str) -> Result<CaptureDetails>;

    /// Refund a completed capture
    async fn refund_capture(&self, capture_id: &str) -> Result<RefundDetails>;

    /// Create a catalog product, returning the raw provider response
    async fn create_product(&self) -> Result<serde_json::Value>;

    /// Create a monthly billing plan for a product, returning the plan id
    async fn create_plan(&self, product_id: &str) -> Result<String>;

    /// Fetch a plan's current attributes
    async fn fetch_plan(&self, plan_id: &str) -> Result<PlanDetails>;

    /// Activate a plan (provider answers 204 on success)
    async fn activate_plan(&self, plan_id: &str) -> Result<()>;

    /// Enroll a subscriber in a plan
    async fn create_subscription(&self, plan_id: &str) -> Result<SubscriptionResource>;

    /// Get provider name
    fn name(&self) -> &str;
}

/// Newly created order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedOrder {
    pub id: String,
}

/// Capture extracted from the first purchase unit of a captured order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureDetails {
    pub id: String,
    pub status: String,
}

/// Refund issued against a capture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundDetails {
    pub id: String,
    pub status: String,
}

/// Plan attributes as reported by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDetails {
    pub id: String,
    pub name: String,
    pub status: String,
    pub interval_unit: String,
    pub value: String,
    pub currency_code: String,
}

/// Subscription as reported by the provider, links unprocessed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionResource {
    pub id: String,
    pub status: String,
    pub links: Vec<LinkDescription>,
}

/// HATEOAS link entry from a provider response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkDescription {
    pub href: String,
    pub rel: String,
}
