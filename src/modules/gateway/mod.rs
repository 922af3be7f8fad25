// Gateway module: the seam to the remote payment provider

pub mod services;

pub use services::{
    BillingProvider, CaptureDetails, CreatedOrder, LinkDescription, PayPalClient, PlanDetails,
    RefundDetails, SubscriptionResource,
};
