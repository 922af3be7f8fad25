// Billing module: catalog products, plans and subscriptions

pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{ActivationOutcome, PlanStatus, PlanSummary, SubscriptionDetails};
pub use services::BillingService;
