use super::provider::{
    BillingProvider, CaptureDetails, CreatedOrder, LinkDescription, PlanDetails, RefundDetails,
    SubscriptionResource,
};
use crate::core::{AppError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;

/// PayPal REST API client
///
/// Implements BillingProvider for the PayPal Orders, Payments and
/// Subscriptions APIs. A fresh access token is requested for every operation;
/// the provider keeps all authoritative state.
/// API Documentation: https://developer.paypal.com/api/rest/
pub struct PayPalClient {
    client: Client,
    client_id: String,
    client_secret: String,
    base_url: String,
    /// Base URL of this service, used for subscription return/cancel links
    return_base_url: String,
}

impl PayPalClient {
    /// Create a new PayPal client
    ///
    /// # Arguments
    /// * `client_id` - PayPal REST app client id (from PAYPAL_CLIENT_ID env var)
    /// * `client_secret` - PayPal REST app secret
    /// * `base_url` - PayPal API base URL (defaults to sandbox)
    /// * `return_base_url` - public base URL of this service
    pub fn new(
        client_id: String,
        client_secret: String,
        base_url: Option<String>,
        return_base_url: String,
    ) -> Self {
        Self {
            client: Client::new(),
            client_id,
            client_secret,
            base_url: base_url.unwrap_or_else(|| "https://api-m.sandbox.paypal.com".to_string()),
            return_base_url,
        }
    }

    /// Obtain a bearer token via the client-credentials grant.
    ///
    /// Requested fresh on every operation. A non-200 answer from the token
    /// endpoint fails the whole operation before any payment call is made.
    async fn access_token(&self) -> Result<String> {
        let url = format!("{}/v1/oauth2/token", self.base_url);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    AppError::auth(format!(
                        "PayPal token endpoint unreachable: {} ({})",
                        if e.is_timeout() {
                            "timeout"
                        } else {
                            "connection failed"
                        },
                        e
                    ))
                } else {
                    AppError::auth(format!("PayPal token request failed: {}", e))
                }
            })?;

        if response.status() != StatusCode::OK {
            return Err(AppError::auth(format!(
                "PayPal token endpoint returned HTTP {}",
                response.status().as_u16()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::auth(format!("Failed to parse PayPal token response: {}", e)))?;

        Ok(token.access_token)
    }

    fn request_error(what: &str, e: reqwest::Error) -> AppError {
        if e.is_connect() || e.is_timeout() {
            AppError::provider(format!(
                "PayPal unavailable during {}: {} ({})",
                what,
                if e.is_timeout() {
                    "timeout"
                } else {
                    "connection failed"
                },
                e
            ))
        } else {
            AppError::provider(format!("PayPal {} request failed: {}", what, e))
        }
    }

    /// Read the body and enforce the accepted status set for an operation.
    async fn read_body(response: Response, accepted: &[StatusCode], what: &str) -> Result<String> {
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::provider(format!("Failed to read PayPal {} response: {}", what, e))
        })?;

        if !accepted.contains(&status) {
            return Err(AppError::provider(format!(
                "PayPal {} failed - HTTP {} ({})",
                what,
                status.as_u16(),
                body
            )));
        }

        Ok(body)
    }

    fn parse<T: serde::de::DeserializeOwned>(body: &str, what: &str) -> Result<T> {
        serde_json::from_str(body)
            .map_err(|e| AppError::provider(format!("Failed to parse PayPal {} response: {}", what, e)))
    }
}

const CREATED_OK: &[StatusCode] = &[StatusCode::OK, StatusCode::CREATED];

#[async_trait]
impl BillingProvider for PayPalClient {
    async fn create_order(&self) -> Result<CreatedOrder> {
        let token = self.access_token().await?;
        let url = format!("{}/v2/checkout/orders", self.base_url);

        // Single fixed-amount purchase unit with immediate-capture intent
        let payload = json!({
            "intent": "CAPTURE",
            "purchase_units": [
                {
                    "amount": {
                        "currency_code": "USD",
                        "value": "1.00"
                    }
                }
            ]
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Self::request_error("order create", e))?;

        let body = Self::read_body(response, CREATED_OK, "order create").await?;
        let order: OrderResponse = Self::parse(&body, "order create")?;

        Ok(CreatedOrder { id: order.id })
    }

    async fn capture_order(&self, order_id: &str) -> Result<CaptureDetails> {
        let token = self.access_token().await?;
        let url = format!("{}/v2/checkout/orders/{}/capture", self.base_url, order_id);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&json!({}))
            .send()
            .await
            .map_err(|e| Self::request_error("order capture", e))?;

        let body = Self::read_body(response, CREATED_OK, "order capture").await?;
        let captured: CaptureOrderResponse = Self::parse(&body, "order capture")?;

        // The provider reports captures nested per purchase unit; this facade
        // only ever creates single-unit orders, so the first capture of the
        // first unit is the transaction.
        let unit = captured.purchase_units.into_iter().next().ok_or_else(|| {
            AppError::provider(format!(
                "PayPal capture response for order {} contained no purchase units",
                order_id
            ))
        })?;
        let capture = unit.payments.captures.into_iter().next().ok_or_else(|| {
            AppError::provider(format!(
                "PayPal capture response for order {} contained no captures",
                order_id
            ))
        })?;

        Ok(CaptureDetails {
            id: capture.id,
            status: capture.status,
        })
    }

    async fn refund_capture(&self, capture_id: &str) -> Result<RefundDetails> {
        let token = self.access_token().await?;
        let url = format!(
            "{}/v2/payments/captures/{}/refund",
            self.base_url, capture_id
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&json!({}))
            .send()
            .await
            .map_err(|e| Self::request_error("refund", e))?;

        let body = Self::read_body(response, CREATED_OK, "refund").await?;
        let refund: RefundResponse = Self::parse(&body, "refund")?;

        Ok(RefundDetails {
            id: refund.id,
            status: refund.status,
        })
    }

    async fn create_product(&self) -> Result<serde_json::Value> {
        let token = self.access_token().await?;
        let url = format!("{}/v1/catalogs/products", self.base_url);

        let payload = json!({
            "name": "Premium Streaming Service",
            "description": "Monthly access to the premium catalog",
            "type": "SERVICE",
            "category": "SOFTWARE"
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Self::request_error("product create", e))?;

        let body = Self::read_body(response, CREATED_OK, "product create").await?;
        Self::parse(&body, "product create")
    }

    async fn create_plan(&self, product_id: &str) -> Result<String> {
        let token = self.access_token().await?;
        let url = format!("{}/v1/billing/plans", self.base_url);

        // Fixed monthly schedule; total_cycles 0 means the plan renews until
        // the subscription is cancelled.
        let payload = json!({
            "product_id": product_id,
            "name": "Monthly Plan",
            "description": "Monthly subscription plan",
            "billing_cycles": [
                {
                    "frequency": {
                        "interval_unit": "MONTH",
                        "interval_count": 1
                    },
                    "tenure_type": "REGULAR",
                    "sequence": 1,
                    "total_cycles": 0,
                    "pricing_scheme": {
                        "fixed_price": {
                            "value": "10",
                            "currency_code": "USD"
                        }
                    }
                }
            ],
            "payment_preferences": {
                "auto_bill_outstanding": true,
                "setup_fee_failure_action": "CONTINUE",
                "payment_failure_threshold": 3
            }
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Self::request_error("plan create", e))?;

        let body = Self::read_body(response, CREATED_OK, "plan create").await?;
        let plan: PlanCreateResponse = Self::parse(&body, "plan create")?;

        Ok(plan.id)
    }

    async fn fetch_plan(&self, plan_id: &str) -> Result<PlanDetails> {
        let token = self.access_token().await?;
        let url = format!("{}/v1/billing/plans/{}", self.base_url, plan_id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| Self::request_error("plan fetch", e))?;

        let body = Self::read_body(response, &[StatusCode::OK], "plan fetch").await?;
        let plan: PlanResponse = Self::parse(&body, "plan fetch")?;

        let cycle = plan.billing_cycles.into_iter().next().ok_or_else(|| {
            AppError::provider(format!("PayPal plan {} has no billing cycles", plan_id))
        })?;

        Ok(PlanDetails {
            id: plan.id,
            name: plan.name,
            status: plan.status,
            interval_unit: cycle.frequency.interval_unit,
            value: cycle.pricing_scheme.fixed_price.value,
            currency_code: cycle.pricing_scheme.fixed_price.currency_code,
        })
    }

    async fn activate_plan(&self, plan_id: &str) -> Result<()> {
        let token = self.access_token().await?;
        let url = format!("{}/v1/billing/plans/{}/activate", self.base_url, plan_id);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&json!({}))
            .send()
            .await
            .map_err(|e| Self::request_error("plan activate", e))?;

        // Activation answers 204 with an empty body
        if response.status() != StatusCode::NO_CONTENT {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::provider(format!(
                "PayPal plan activate failed - HTTP {} ({})",
                status.as_u16(),
                body
            )));
        }

        Ok(())
    }

    async fn create_subscription(&self, plan_id: &str) -> Result<SubscriptionResource> {
        let token = self.access_token().await?;
        let url = format!("{}/v1/billing/subscriptions", self.base_url);

        let payload = json!({
            "plan_id": plan_id,
            "subscriber": {
                "name": {
                    "given_name": "John",
                    "surname": "Doe"
                },
                "email_address": "customer@example.com"
            },
            "application_context": {
                "brand_name": "Paybridge Demo Store",
                "locale": "en-US",
                "user_action": "SUBSCRIBE_NOW",
                "return_url": format!("{}/success", self.return_base_url),
                "cancel_url": format!("{}/processing_subs.html", self.return_base_url)
            }
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Self::request_error("subscription create", e))?;

        let body = Self::read_body(response, CREATED_OK, "subscription create").await?;
        let subscription: SubscriptionResponse = Self::parse(&body, "subscription create")?;

        Ok(SubscriptionResource {
            id: subscription.id,
            status: subscription.status,
            links: subscription
                .links
                .into_iter()
                .map(|link| LinkDescription {
                    href: link.href,
                    rel: link.rel,
                })
                .collect(),
        })
    }

    fn name(&self) -> &str {
        "paypal"
    }
}

// PayPal API response structures

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct OrderResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct CaptureOrderResponse {
    purchase_units: Vec<CapturePurchaseUnit>,
}

#[derive(Debug, Deserialize)]
struct CapturePurchaseUnit {
    payments: CapturePayments,
}

#[derive(Debug, Deserialize)]
struct CapturePayments {
    captures: Vec<CaptureRecord>,
}

#[derive(Debug, Deserialize)]
struct CaptureRecord {
    id: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct RefundResponse {
    id: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct PlanCreateResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct PlanResponse {
    id: String,
    name: String,
    status: String,
    billing_cycles: Vec<BillingCycle>,
}

#[derive(Debug, Deserialize)]
struct BillingCycle {
    frequency: Frequency,
    pricing_scheme: PricingScheme,
}

#[derive(Debug, Deserialize)]
struct Frequency {
    interval_unit: String,
}

#[derive(Debug, Deserialize)]
struct PricingScheme {
    fixed_price: FixedPrice,
}

#[derive(Debug, Deserialize)]
struct FixedPrice {
    value: String,
    currency_code: String,
}

#[derive(Debug, Deserialize)]
struct SubscriptionResponse {
    id: String,
    status: String,
    #[serde(default)]
    links: Vec<SubscriptionLink>,
}

#[derive(Debug, Deserialize)]
struct SubscriptionLink {
    href: String,
    rel: String,
}
