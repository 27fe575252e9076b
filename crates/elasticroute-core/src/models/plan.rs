//! Plan model definition and related functionality.

use jiff::Timestamp;
use log::info;

use super::{ConnectionType, Depot, GeneralSettings, PlanStatus, Stop, Vehicle};

/// Aggregate of stops, vehicles, depots and settings submitted for routing.
///
/// The entity lists are public and keep insertion order, which is also the
/// order they are sent in. Server-assigned state (`status`, `progress`,
/// `submitted_at`) is read-only and only changes through reconciliation.
///
/// A plan must be exclusively owned by one in-flight solve or refresh at a
/// time. Both take `&mut Plan`, and submission mutates entities in place
/// while filling defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    id: String,
    api_key: Option<String>,
    connection_type: ConnectionType,

    /// Stops to route, in submission order
    pub stops: Vec<Stop>,

    /// Vehicles available for the plan, in submission order
    pub vehicles: Vec<Vehicle>,

    /// Depots, in submission order. The first one is the fallback depot for
    /// stops and vehicles that name none.
    pub depots: Vec<Depot>,

    /// Plan-wide defaults and limits
    pub general_settings: GeneralSettings,

    status: PlanStatus,
    progress: u8,
    submitted_at: Option<Timestamp>,
}

impl Plan {
    /// Creates an empty plan with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            api_key: None,
            connection_type: ConnectionType::default(),
            stops: Vec::new(),
            vehicles: Vec::new(),
            depots: Vec::new(),
            general_settings: GeneralSettings::default(),
            status: PlanStatus::default(),
            progress: 0,
            submitted_at: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Per-plan credential overriding the configured default.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn set_api_key(&mut self, api_key: Option<String>) {
        self.api_key = api_key;
    }

    /// Resolves the bearer credential for this plan: the plan's own key when
    /// set, otherwise `default`.
    pub fn resolve_api_key<'a>(&'a self, default: Option<&'a str>) -> Option<&'a str> {
        self.api_key.as_deref().or(default)
    }

    pub fn connection_type(&self) -> ConnectionType {
        self.connection_type
    }

    pub fn set_connection_type(&mut self, connection_type: ConnectionType) {
        self.connection_type = connection_type;
    }

    pub fn status(&self) -> PlanStatus {
        self.status
    }

    /// Solving progress reported by the service, 0 to 100.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn submitted_at(&self) -> Option<Timestamp> {
        self.submitted_at
    }

    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stops.iter().find(|s| s.name() == name)
    }

    pub fn vehicle(&self, name: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.name() == name)
    }

    pub fn depot(&self, name: &str) -> Option<&Depot> {
        self.depots.iter().find(|d| d.name() == name)
    }

    /// Stops the service assigned to `vehicle`, ordered by run then sequence.
    pub fn route_for(&self, vehicle: &str) -> Vec<&Stop> {
        let mut stops: Vec<&Stop> = self
            .stops
            .iter()
            .filter(|s| s.assign_to() == Some(vehicle))
            .collect();
        stops.sort_by_key(|s| (s.run(), s.sequence()));
        stops
    }

    /// Moves the status forward. Backward transitions are ignored.
    pub(crate) fn advance_status(&mut self, status: PlanStatus) -> bool {
        if status <= self.status {
            return false;
        }
        info!(
            "Plan {} status {} -> {}",
            self.id,
            self.status.as_str(),
            status.as_str()
        );
        self.status = status;
        true
    }

    pub(crate) fn set_server_state(
        &mut self,
        id: Option<String>,
        progress: u8,
        submitted_at: Option<Timestamp>,
    ) {
        if let Some(id) = id {
            self.id = id;
        }
        self.progress = progress;
        self.submitted_at = submitted_at;
    }
}
