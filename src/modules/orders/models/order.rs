use serde::{Deserialize, Serialize};

/// Response body for POST /create-order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub id: String,
}

/// Response body for POST /capture-order/{order_id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureOrderResponse {
    pub transaction_id: String,
    pub status: String,
}

/// Response body for POST /refund-transaction/{capture_id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundResponse {
    pub message: String,
    pub refund_id: String,
    pub refund_status: String,
}
