//! Status and mode enumerations for plans.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Submission state of a plan.
///
/// Transitions only move forward: `Unsubmitted → Submitted → Planned`.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    /// Plan has not been sent to the service yet
    #[default]
    Unsubmitted,

    /// Service accepted the plan and is solving it
    Submitted,

    /// Service has finished solving the plan
    Planned,
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unsubmitted" => Ok(PlanStatus::Unsubmitted),
            "submitted" => Ok(PlanStatus::Submitted),
            "planned" => Ok(PlanStatus::Planned),
            _ => Err(format!("Invalid plan status: {s}")),
        }
    }
}

impl PlanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Unsubmitted => "unsubmitted",
            PlanStatus::Submitted => "submitted",
            PlanStatus::Planned => "planned",
        }
    }
}

/// How the service delivers the solution for a submitted plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    /// The solve request blocks until the plan is solved
    #[default]
    Sync,

    /// The solve request returns immediately; poll with refresh
    Poll,

    /// The service calls the configured webhook when solving finishes
    Webhook,
}

impl FromStr for ConnectionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sync" => Ok(ConnectionType::Sync),
            "poll" => Ok(ConnectionType::Poll),
            "webhook" => Ok(ConnectionType::Webhook),
            _ => Err(format!("Invalid connection type: {s}")),
        }
    }
}

impl ConnectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionType::Sync => "sync",
            ConnectionType::Poll => "poll",
            ConnectionType::Webhook => "webhook",
        }
    }

    /// Query string appended to the solve request path, if any.
    pub fn query(&self) -> Option<&'static str> {
        match self {
            ConnectionType::Sync => Some("c=sync"),
            ConnectionType::Poll => None,
            ConnectionType::Webhook => Some("w=true"),
        }
    }
}

/// Unit for distances reported and constrained by the service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Km,
    Miles,
}

impl FromStr for DistanceUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "km" => Ok(DistanceUnit::Km),
            "miles" => Ok(DistanceUnit::Miles),
            _ => Err(format!("Invalid distance unit: {s}")),
        }
    }
}

impl DistanceUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Km => "km",
            DistanceUnit::Miles => "miles",
        }
    }
}
