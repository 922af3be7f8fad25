mod order;

pub use order::{CaptureOrderResponse, CreateOrderResponse, RefundResponse};
