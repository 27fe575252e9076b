//! Immutable record of what was sent for a plan.

use jiff::Timestamp;
use serde_json::Value;

use crate::{
    error::Result,
    models::{ConnectionType, Depot, GeneralSettings, Plan, Stop, Vehicle},
    wire::{request_body, request_path, Emit},
};

/// A deep copy of a plan taken at the moment of submission, together with
/// the exact request body and path built from it.
///
/// Later mutations of the live plan do not affect the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    plan: Plan,
    path: String,
    body: Value,
    captured_at: Timestamp,
}

impl Submission {
    /// Captures `plan` and the request it produces.
    pub fn capture(plan: &Plan) -> Result<Self> {
        Ok(Self {
            path: request_path(plan),
            body: request_body(plan, Emit::Changed)?,
            plan: plan.clone(),
            captured_at: Timestamp::now(),
        })
    }

    pub fn id(&self) -> &str {
        self.plan.id()
    }

    pub fn connection_type(&self) -> ConnectionType {
        self.plan.connection_type()
    }

    pub fn stops(&self) -> &[Stop] {
        &self.plan.stops
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.plan.vehicles
    }

    pub fn depots(&self) -> &[Depot] {
        &self.plan.depots
    }

    pub fn general_settings(&self) -> &GeneralSettings {
        &self.plan.general_settings
    }

    /// Request path, including the connection-mode query.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Request body exactly as sent.
    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn captured_at(&self) -> Timestamp {
        self.captured_at
    }
}
