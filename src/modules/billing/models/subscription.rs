use serde::{Deserialize, Serialize};

/// Response body for POST /create-subscription
///
/// The approve link is required: a subscription nobody can approve is
/// unusable, so its absence in the provider response is reported as an error
/// instead of an empty body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionDetails {
    pub id: String,
    pub status: String,
    pub approve_link: String,
    pub cancel_link: Option<String>,
}
