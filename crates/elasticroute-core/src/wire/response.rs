//! Decoded response bodies returned by the routing service.

use jiff::{civil::DateTime, tz::TimeZone, Timestamp};
use serde::{Deserialize, Deserializer};

/// Top-level response envelope: `{ "data": { ... } }`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PlanResponse {
    pub data: PlanData,
}

/// Server-side state of a plan.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PlanData {
    #[serde(default)]
    pub plan_id: Option<String>,
    /// Server stage, e.g. `submitted` or `planned`
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub progress: Option<u32>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub submitted: Option<Timestamp>,
    #[serde(default)]
    pub details: PlanDetails,
}

/// Entity records echoed back by the service, including solve results.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PlanDetails {
    #[serde(default)]
    pub stops: Vec<StopRecord>,
    #[serde(default)]
    pub vehicles: Vec<VehicleRecord>,
    #[serde(default)]
    pub depots: Vec<DepotRecord>,
}

/// A stop as returned by the service. Absent fields decode as `None`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct StopRecord {
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
    #[serde(default)]
    pub assign_to: Option<String>,
    #[serde(default)]
    pub run: Option<u32>,
    #[serde(default)]
    pub sequence: Option<u32>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub eta: Option<Timestamp>,
    #[serde(default)]
    pub exception: Option<String>,
}

/// A vehicle as returned by the service.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct VehicleRecord {
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
    pub vehicle_types: Option<Vec<String>>,
}

/// A depot as returned by the service.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DepotRecord {
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

/// Accepts RFC 3339 timestamps as well as offset-less date-times, which are
/// read as UTC.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Ok(Some(ts));
    }
    raw.parse::<DateTime>()
        .and_then(|dt| dt.to_zoned(TimeZone::UTC))
        .map(|zoned| Some(zoned.timestamp()))
        .map_err(serde::de::Error::custom)
}
