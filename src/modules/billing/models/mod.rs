mod plan;
mod subscription;

pub use plan::{ActivationOutcome, PlanStatus, PlanSummary, UnknownPlanStatus};
pub use subscription::SubscriptionDetails;
