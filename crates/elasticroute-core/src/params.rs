//! Input structures for building plans from JSON documents.
//!
//! Interfaces such as the CLI read plan files into these plain serde types
//! and convert them into validated domain entities with `TryFrom`. Every
//! value goes through the entity setters, so a file with a negative load or
//! a blank name fails with the same `BadField` message as code that calls
//! the setter directly.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Plan file     │    │   PlanInput     │    │      Plan       │
//! │     (JSON)      │───▶│ (serde derives) │───▶│ (validated via  │
//! │                 │    │                 │    │    setters)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```rust
//! use elasticroute_core::{params::PlanInput, Plan};
//!
//! let input: PlanInput = serde_json::from_str(r#"{
//!     "id": "TestPlan_1",
//!     "depots": [{"name": "Main Warehouse", "address": "8 Somapah Road"}],
//!     "vehicles": [{"name": "Van 1"}],
//!     "stops": [
//!         {"name": "Customer 1", "address": "15 Simei Street 4"},
//!         {"name": "Customer 2", "address": "59 Changi South Avenue 1"}
//!     ]
//! }"#)?;
//! let plan = Plan::try_from(input)?;
//! assert_eq!(plan.stops.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::{
    error::{Result, RouteError},
    models::{ConnectionType, Depot, DistanceUnit, GeneralSettings, Plan, Stop, Vehicle},
};

/// A plan as written in a plan file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanInput {
    pub id: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub connection_type: Option<ConnectionType>,
    #[serde(default)]
    pub stops: Vec<StopInput>,
    #[serde(default)]
    pub vehicles: Vec<VehicleInput>,
    #[serde(default)]
    pub depots: Vec<DepotInput>,
    #[serde(default)]
    pub general_settings: Option<SettingsInput>,
}

impl PlanInput {
    /// Reads a plan file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| RouteError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StopInput {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub depot: Option<String>,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub weight_load: Option<f64>,
    #[serde(default)]
    pub volume_load: Option<f64>,
    #[serde(default)]
    pub seating_load: Option<f64>,
    #[serde(default)]
    pub service_time: Option<u32>,
    #[serde(default)]
    pub from: Option<u32>,
    #[serde(default)]
    pub till: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VehicleInput {
    pub name: String,
    #[serde(default)]
    pub depot: Option<String>,
    #[serde(default)]
    pub priority: Option<u32>,
    #[serde(default)]
    pub weight_capacity: Option<f64>,
    #[serde(default)]
    pub volume_capacity: Option<f64>,
    #[serde(default)]
    pub seating_capacity: Option<f64>,
    #[serde(default)]
    pub buffer: Option<u32>,
    #[serde(default)]
    pub avail_from: Option<u32>,
    #[serde(default)]
    pub avail_till: Option<u32>,
    #[serde(default)]
    pub return_to_depot: Option<bool>,
    #[serde(default)]
    pub vehicle_types: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DepotInput {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default, rename = "default")]
    pub is_default: Option<bool>,
}

/// General settings as written in a plan file. Omitted fields keep the
/// [`GeneralSettings`] defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsInput {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub loading_time: Option<u32>,
    #[serde(default)]
    pub buffer: Option<u32>,
    #[serde(default)]
    pub service_time: Option<u32>,
    #[serde(default)]
    pub distance_unit: Option<DistanceUnit>,
    #[serde(default)]
    pub max_time: Option<u32>,
    #[serde(default)]
    pub max_distance: Option<u32>,
    #[serde(default)]
    pub max_stops: Option<u32>,
    #[serde(default)]
    pub max_runs: Option<u32>,
    #[serde(default)]
    pub avail_from: Option<u32>,
    #[serde(default)]
    pub avail_till: Option<u32>,
    #[serde(default)]
    pub webhook_url: Option<String>,
}

impl TryFrom<StopInput> for Stop {
    type Error = RouteError;

    fn try_from(input: StopInput) -> Result<Self> {
        let mut stop = Stop::new(&input.name)?;
        stop.set_address(input.address);
        stop.set_postal_code(input.postal_code);
        stop.set_lat(input.lat)?;
        stop.set_lng(input.lng)?;
        stop.set_depot(input.depot);
        stop.set_vehicle_type(input.vehicle_type);
        stop.set_weight_load(input.weight_load)?;
        stop.set_volume_load(input.volume_load)?;
        stop.set_seating_load(input.seating_load)?;
        stop.set_service_time(input.service_time);
        stop.set_from(input.from);
        stop.set_till(input.till);
        Ok(stop)
    }
}

impl TryFrom<VehicleInput> for Vehicle {
    type Error = RouteError;

    fn try_from(input: VehicleInput) -> Result<Self> {
        let mut vehicle = Vehicle::new(&input.name)?;
        vehicle.set_depot(input.depot);
        vehicle.set_priority(input.priority);
        vehicle.set_weight_capacity(input.weight_capacity)?;
        vehicle.set_volume_capacity(input.volume_capacity)?;
        vehicle.set_seating_capacity(input.seating_capacity)?;
        vehicle.set_buffer(input.buffer);
        vehicle.set_avail_from(input.avail_from)?;
        vehicle.set_avail_till(input.avail_till)?;
        vehicle.set_return_to_depot(input.return_to_depot);
        vehicle.set_vehicle_types(input.vehicle_types);
        Ok(vehicle)
    }
}

impl TryFrom<DepotInput> for Depot {
    type Error = RouteError;

    fn try_from(input: DepotInput) -> Result<Self> {
        let mut depot = Depot::new(&input.name)?;
        depot.set_address(input.address);
        depot.set_postal_code(input.postal_code);
        depot.set_lat(input.lat)?;
        depot.set_lng(input.lng)?;
        depot.set_default(input.is_default);
        Ok(depot)
    }
}

impl TryFrom<SettingsInput> for GeneralSettings {
    type Error = RouteError;

    fn try_from(input: SettingsInput) -> Result<Self> {
        let mut settings = GeneralSettings::default();
        if let Some(country) = input.country {
            settings.country = country;
        }
        if let Some(timezone) = input.timezone {
            settings.timezone = timezone;
        }
        if let Some(distance_unit) = input.distance_unit {
            settings.distance_unit = distance_unit;
        }
        settings.loading_time = input.loading_time;
        settings.buffer = input.buffer;
        settings.service_time = input.service_time;
        settings.max_time = input.max_time;
        settings.max_distance = input.max_distance;
        settings.max_stops = input.max_stops;
        settings.max_runs = input.max_runs;
        settings.webhook_url = input.webhook_url;
        settings.set_from(input.avail_from)?;
        settings.set_till(input.avail_till)?;
        Ok(settings)
    }
}

impl TryFrom<PlanInput> for Plan {
    type Error = RouteError;

    /// Builds a plan whose entities are all marked as changed, ready for a
    /// first submission.
    fn try_from(input: PlanInput) -> Result<Self> {
        let mut plan = Plan::new(input.id);
        plan.set_api_key(input.api_key);
        if let Some(connection_type) = input.connection_type {
            plan.set_connection_type(connection_type);
        }
        plan.stops = input
            .stops
            .into_iter()
            .map(Stop::try_from)
            .collect::<Result<_>>()?;
        plan.vehicles = input
            .vehicles
            .into_iter()
            .map(Vehicle::try_from)
            .collect::<Result<_>>()?;
        plan.depots = input
            .depots
            .into_iter()
            .map(Depot::try_from)
            .collect::<Result<_>>()?;
        if let Some(settings) = input.general_settings {
            plan.general_settings = GeneralSettings::try_from(settings)?;
        }
        Ok(plan)
    }
}
