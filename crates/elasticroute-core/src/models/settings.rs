//! Plan-wide general settings.

use serde::Serialize;

use super::fields::checked_clock;
use super::DistanceUnit;
use crate::error::Result;

/// Latest clock value accepted for the plan-wide service window.
pub const MAX_WINDOW_TIME: u32 = 2400;

/// Plan-wide defaults and limits.
///
/// Settings are not change-tracked: every set field is sent with each
/// request. Unset optional fields are omitted from the wire form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneralSettings {
    pub country: String,
    pub timezone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loading_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_time: Option<u32>,
    pub distance_unit: DistanceUnit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_stops: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_runs: Option<u32>,
    #[serde(rename = "avail_from", skip_serializing_if = "Option::is_none")]
    from: Option<u32>,
    #[serde(rename = "avail_till", skip_serializing_if = "Option::is_none")]
    till: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            country: "SG".to_string(),
            timezone: "Asia/Singapore".to_string(),
            loading_time: None,
            buffer: None,
            service_time: None,
            distance_unit: DistanceUnit::Km,
            max_time: None,
            max_distance: None,
            max_stops: None,
            max_runs: None,
            from: None,
            till: None,
            webhook_url: None,
        }
    }
}

impl GeneralSettings {
    /// Default start of the service window for stops and vehicles.
    pub fn from(&self) -> Option<u32> {
        self.from
    }

    /// Default end of the service window for stops and vehicles.
    pub fn till(&self) -> Option<u32> {
        self.till
    }

    pub fn set_from(&mut self, from: Option<u32>) -> Result<()> {
        self.from = checked_clock(
            || format!("AvailFrom of GeneralSettings must be between 0 and {MAX_WINDOW_TIME}"),
            from,
            MAX_WINDOW_TIME,
        )?;
        Ok(())
    }

    pub fn set_till(&mut self, till: Option<u32>) -> Result<()> {
        self.till = checked_clock(
            || format!("AvailTill of GeneralSettings must be between 0 and {MAX_WINDOW_TIME}"),
            till,
            MAX_WINDOW_TIME,
        )?;
        Ok(())
    }
}
