pub mod paypal;
pub mod provider;

pub use paypal::PayPalClient;
pub use provider::{
    BillingProvider, CaptureDetails, CreatedOrder, LinkDescription, PlanDetails, RefundDetails,
    SubscriptionResource,
};
