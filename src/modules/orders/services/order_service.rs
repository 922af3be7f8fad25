use std::sync::Arc;

use tracing::{error, info};

use crate::core::Result;
use crate::modules::gateway::BillingProvider;
use crate::modules::orders::models::{CaptureOrderResponse, CreateOrderResponse, RefundResponse};

/// Service for the one-time order lifecycle: create, capture, refund
pub struct OrderService {
    provider: Arc<dyn BillingProvider>,
}

impl OrderService {
    pub fn new(provider: Arc<dyn BillingProvider>) -> Self {
        Self { provider }
    }

    /// Create a fixed-amount order with capture intent
    pub async fn create_order(&self) -> Result<CreateOrderResponse> {
        match self.provider.create_order().await {
            Ok(order) => {
                info!(
                    provider = %self.provider.name(),
                    order_id = %order.id,
                    "Order created"
                );
                Ok(CreateOrderResponse { id: order.id })
            }
            Err(e) => {
                error!(provider = %self.provider.name(), error = %e, "Failed to create order");
                Err(e)
            }
        }
    }

    /// Capture an order's payment, reporting the resulting transaction
    pub async fn capture_order(&self, order_id: &str) -> Result<CaptureOrderResponse> {
        match self.provider.capture_order(order_id).await {
            Ok(capture) => {
                info!(
                    provider = %self.provider.name(),
                    order_id = %order_id,
                    transaction_id = %capture.id,
                    status = %capture.status,
                    "Order captured"
                );
                Ok(CaptureOrderResponse {
                    transaction_id: capture.id,
                    status: capture.status,
                })
            }
            Err(e) => {
                error!(
                    provider = %self.provider.name(),
                    order_id = %order_id,
                    error = %e,
                    "Failed to capture order"
                );
                Err(e)
            }
        }
    }

    /// Refund a completed capture
    pub async fn refund(&self, capture_id: &str) -> Result<RefundResponse> {
        match self.provider.refund_capture(capture_id).await {
            Ok(refund) => {
                info!(
                    provider = %self.provider.name(),
                    capture_id = %capture_id,
                    refund_id = %refund.id,
                    status = %refund.status,
                    "Capture refunded"
                );
                Ok(RefundResponse {
                    message: "Refund completed".to_string(),
                    refund_id: refund.id,
                    refund_status: refund.status,
                })
            }
            Err(e) => {
                error!(
                    provider = %self.provider.name(),
                    capture_id = %capture_id,
                    error = %e,
                    "Failed to refund capture"
                );
                Err(e)
            }
        }
    }
}
