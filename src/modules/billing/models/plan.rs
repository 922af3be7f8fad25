use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Plan lifecycle status as reported by the provider.
///
/// Only these three states are acceptable input to activation; anything else
/// the provider reports is treated as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanStatus {
    Created,
    Inactive,
    Active,
}

impl FromStr for PlanStatus {
    type Err = UnknownPlanStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATED" => Ok(PlanStatus::Created),
            "INACTIVE" => Ok(PlanStatus::Inactive),
            "ACTIVE" => Ok(PlanStatus::Active),
            other => Err(UnknownPlanStatus(other.to_string())),
        }
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlanStatus::Created => "CREATED",
            PlanStatus::Inactive => "INACTIVE",
            PlanStatus::Active => "ACTIVE",
        };
        f.write_str(s)
    }
}

/// Status string the provider reported that this facade does not handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlanStatus(pub String);

/// Response body for POST /create-plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    pub id: String,
    pub name: String,
    pub interval_unit: String,
    pub value: String,
    pub currency_code: String,
}

/// Outcome of an activation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// Plan was CREATED or INACTIVE and an activation call succeeded
    Activated,
    /// Plan was already ACTIVE; no activation call was issued
    AlreadyActive,
}

impl ActivationOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            ActivationOutcome::Activated => "Plan activated successfully",
            ActivationOutcome::AlreadyActive => "Plan is already active",
        }
    }
}
