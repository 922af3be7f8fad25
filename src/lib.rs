//! Paybridge, an HTTP facade over the PayPal REST API.
//!
//! Proxies order, capture, refund, product, plan and subscription calls to
//! the provider; all authoritative state stays remote.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::billing;
pub use modules::gateway;
pub use modules::health;
pub use modules::orders;
pub use modules::pages;
