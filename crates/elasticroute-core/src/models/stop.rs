//! Stop model definition.

use jiff::Timestamp;

use super::fields::{checked_coordinate, checked_name, checked_quantity, StopField};
use super::tracker::ChangeSet;
use crate::error::Result;
use crate::wire::StopRecord;

/// A delivery or pickup location to be served by exactly one vehicle run.
///
/// Request fields are changed through validating setters that record the
/// modified field. Result fields (`assign_to`, `run`, `sequence`, `eta`,
/// `exception`) are only ever written by [`Stop::absorb`].
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    name: String,
    address: Option<String>,
    postal_code: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
    depot: Option<String>,
    vehicle_type: Option<String>,
    weight_load: Option<f64>,
    volume_load: Option<f64>,
    seating_load: Option<f64>,
    service_time: Option<u32>,
    from: Option<u32>,
    till: Option<u32>,

    assign_to: Option<String>,
    run: Option<u32>,
    sequence: Option<u32>,
    eta: Option<Timestamp>,
    exception: Option<String>,

    changes: ChangeSet<StopField>,
}

impl Stop {
    /// Creates a stop with only a name.
    pub fn new(name: &str) -> Result<Self> {
        let mut stop = Self {
            name: String::new(),
            address: None,
            postal_code: None,
            lat: None,
            lng: None,
            depot: None,
            vehicle_type: None,
            weight_load: None,
            volume_load: None,
            seating_load: None,
            service_time: None,
            from: None,
            till: None,
            assign_to: None,
            run: None,
            sequence: None,
            eta: None,
            exception: None,
            changes: ChangeSet::new(),
        };
        stop.set_name(name)?;
        Ok(stop)
    }

    /// Creates a stop located by street address.
    pub fn with_address(name: &str, address: impl Into<String>) -> Result<Self> {
        let mut stop = Self::new(name)?;
        stop.set_address(Some(address.into()));
        Ok(stop)
    }

    /// Creates a stop located by coordinates.
    pub fn with_coordinates(name: &str, lat: f64, lng: f64) -> Result<Self> {
        let mut stop = Self::new(name)?;
        stop.set_lat(Some(lat))?;
        stop.set_lng(Some(lng))?;
        Ok(stop)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    pub fn lat(&self) -> Option<f64> {
        self.lat
    }

    pub fn lng(&self) -> Option<f64> {
        self.lng
    }

    /// Name of the depot this stop is served from.
    pub fn depot(&self) -> Option<&str> {
        self.depot.as_deref()
    }

    pub fn vehicle_type(&self) -> Option<&str> {
        self.vehicle_type.as_deref()
    }

    pub fn weight_load(&self) -> Option<f64> {
        self.weight_load
    }

    pub fn volume_load(&self) -> Option<f64> {
        self.volume_load
    }

    pub fn seating_load(&self) -> Option<f64> {
        self.seating_load
    }

    pub fn service_time(&self) -> Option<u32> {
        self.service_time
    }

    pub fn from(&self) -> Option<u32> {
        self.from
    }

    pub fn till(&self) -> Option<u32> {
        self.till
    }

    /// Name of the vehicle the service assigned this stop to.
    pub fn assign_to(&self) -> Option<&str> {
        self.assign_to.as_deref()
    }

    pub fn run(&self) -> Option<u32> {
        self.run
    }

    pub fn sequence(&self) -> Option<u32> {
        self.sequence
    }

    pub fn eta(&self) -> Option<Timestamp> {
        self.eta
    }

    /// Reason the service could not schedule this stop, if any.
    pub fn exception(&self) -> Option<&str> {
        self.exception.as_deref()
    }

    /// Fields modified since the last successful round-trip.
    pub fn changes(&self) -> &ChangeSet<StopField> {
        &self.changes
    }

    pub fn clear_changes(&mut self) {
        self.changes.clear();
    }

    /// Sets the name. Blank or over-long names are rejected and leave the
    /// current name in place.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        let name = checked_name("Stop", name)?;
        self.changes.assign(StopField::Name, &mut self.name, name);
        Ok(())
    }

    pub fn set_address(&mut self, address: Option<String>) {
        self.changes.assign(StopField::Address, &mut self.address, address);
    }

    pub fn set_postal_code(&mut self, postal_code: Option<String>) {
        self.changes.assign(StopField::PostalCode, &mut self.postal_code, postal_code);
    }

    pub fn set_lat(&mut self, lat: Option<f64>) -> Result<()> {
        let lat = checked_coordinate("Stop", "Lat", lat)?;
        self.changes.assign(StopField::Lat, &mut self.lat, lat);
        Ok(())
    }

    pub fn set_lng(&mut self, lng: Option<f64>) -> Result<()> {
        let lng = checked_coordinate("Stop", "Lng", lng)?;
        self.changes.assign(StopField::Lng, &mut self.lng, lng);
        Ok(())
    }

    pub fn set_depot(&mut self, depot: Option<String>) {
        self.changes.assign(StopField::Depot, &mut self.depot, depot);
    }

    pub fn set_vehicle_type(&mut self, vehicle_type: Option<String>) {
        self.changes.assign(StopField::VehicleType, &mut self.vehicle_type, vehicle_type);
    }

    pub fn set_weight_load(&mut self, load: Option<f64>) -> Result<()> {
        let load = checked_quantity("Stop", "WeightLoad", load)?;
        self.changes.assign(StopField::WeightLoad, &mut self.weight_load, load);
        Ok(())
    }

    pub fn set_volume_load(&mut self, load: Option<f64>) -> Result<()> {
        let load = checked_quantity("Stop", "VolumeLoad", load)?;
        self.changes.assign(StopField::VolumeLoad, &mut self.volume_load, load);
        Ok(())
    }

    pub fn set_seating_load(&mut self, load: Option<f64>) -> Result<()> {
        let load = checked_quantity("Stop", "SeatingLoad", load)?;
        self.changes.assign(StopField::SeatingLoad, &mut self.seating_load, load);
        Ok(())
    }

    pub fn set_service_time(&mut self, minutes: Option<u32>) {
        self.changes.assign(StopField::ServiceTime, &mut self.service_time, minutes);
    }

    /// Start of the service window as a 24-hour clock value, e.g. `900`.
    pub fn set_from(&mut self, from: Option<u32>) {
        self.changes.assign(StopField::From, &mut self.from, from);
    }

    /// End of the service window as a 24-hour clock value, e.g. `1700`.
    pub fn set_till(&mut self, till: Option<u32>) {
        self.changes.assign(StopField::Till, &mut self.till, till);
    }

    /// True when the stop carries an address or a complete coordinate pair.
    pub fn is_locatable(&self) -> bool {
        self.address.is_some() || (self.lat.is_some() && self.lng.is_some())
    }

    /// Merges a service record into this stop. Every field is overwritten,
    /// and null fields in the record clear the local value. The change set is
    /// cleared afterwards. On error the stop is left untouched.
    pub fn absorb(&mut self, record: &StopRecord) -> Result<()> {
        let mut merged = self.clone();
        merged.set_name(&record.name)?;
        merged.set_address(record.address.clone());
        merged.set_postal_code(record.postal_code.clone());
        merged.set_lat(record.lat)?;
        merged.set_lng(record.lng)?;
        merged.set_depot(record.depot.clone());
        merged.set_vehicle_type(record.vehicle_type.clone());
        merged.set_weight_load(record.weight_load)?;
        merged.set_volume_load(record.volume_load)?;
        merged.set_seating_load(record.seating_load)?;
        merged.set_service_time(record.service_time);
        merged.set_from(record.from);
        merged.set_till(record.till);
        merged.assign_to = record.assign_to.clone();
        merged.run = record.run;
        merged.sequence = record.sequence;
        merged.eta = record.eta;
        merged.exception = record.exception.clone();
        merged.changes.clear();
        *self = merged;
        Ok(())
    }
}
