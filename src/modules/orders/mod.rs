// Orders module: one-time payment lifecycle

pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{CaptureOrderResponse, CreateOrderResponse, RefundResponse};
pub use services::OrderService;
