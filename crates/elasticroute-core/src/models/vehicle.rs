//! Vehicle model definition.

use super::fields::{checked_clock, checked_name, checked_quantity, VehicleField};
use super::tracker::ChangeSet;
use crate::error::Result;
use crate::wire::VehicleRecord;

/// Latest clock value accepted for a vehicle's availability window.
pub const MAX_AVAIL_TIME: u32 = 2359;

/// A routing resource with capacity and availability constraints.
///
/// Unset capacities mean the vehicle is unconstrained in that dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    name: String,
    depot: Option<String>,
    priority: Option<u32>,
    weight_capacity: Option<f64>,
    volume_capacity: Option<f64>,
    seating_capacity: Option<f64>,
    buffer: Option<u32>,
    avail_from: Option<u32>,
    avail_till: Option<u32>,
    return_to_depot: Option<bool>,
    vehicle_types: Vec<String>,
    changes: ChangeSet<VehicleField>,
}

impl Vehicle {
    pub fn new(name: &str) -> Result<Self> {
        let mut vehicle = Self {
            name: String::new(),
            depot: None,
            priority: None,
            weight_capacity: None,
            volume_capacity: None,
            seating_capacity: None,
            buffer: None,
            avail_from: None,
            avail_till: None,
            return_to_depot: None,
            vehicle_types: Vec::new(),
            changes: ChangeSet::new(),
        };
        vehicle.set_name(name)?;
        Ok(vehicle)
    }

    /// Creates a vehicle based at the named depot.
    pub fn with_depot(name: &str, depot: impl Into<String>) -> Result<Self> {
        let mut vehicle = Self::new(name)?;
        vehicle.set_depot(Some(depot.into()));
        Ok(vehicle)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn depot(&self) -> Option<&str> {
        self.depot.as_deref()
    }

    pub fn priority(&self) -> Option<u32> {
        self.priority
    }

    pub fn weight_capacity(&self) -> Option<f64> {
        self.weight_capacity
    }

    pub fn volume_capacity(&self) -> Option<f64> {
        self.volume_capacity
    }

    pub fn seating_capacity(&self) -> Option<f64> {
        self.seating_capacity
    }

    pub fn buffer(&self) -> Option<u32> {
        self.buffer
    }

    pub fn avail_from(&self) -> Option<u32> {
        self.avail_from
    }

    pub fn avail_till(&self) -> Option<u32> {
        self.avail_till
    }

    pub fn return_to_depot(&self) -> Option<bool> {
        self.return_to_depot
    }

    pub fn vehicle_types(&self) -> &[String] {
        &self.vehicle_types
    }

    /// Fields modified since the last successful round-trip.
    pub fn changes(&self) -> &ChangeSet<VehicleField> {
        &self.changes
    }

    pub fn clear_changes(&mut self) {
        self.changes.clear();
    }

    /// Sets the name. Blank or over-long names are rejected and leave the
    /// current name in place.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        let name = checked_name("Vehicle", name)?;
        self.changes.assign(VehicleField::Name, &mut self.name, name);
        Ok(())
    }

    pub fn set_depot(&mut self, depot: Option<String>) {
        self.changes.assign(VehicleField::Depot, &mut self.depot, depot);
    }

    /// Higher priority vehicles are dispatched first.
    pub fn set_priority(&mut self, priority: Option<u32>) {
        self.changes.assign(VehicleField::Priority, &mut self.priority, priority);
    }

    pub fn set_weight_capacity(&mut self, capacity: Option<f64>) -> Result<()> {
        let capacity = checked_quantity("Vehicle", "WeightCapacity", capacity)?;
        self.changes.assign(VehicleField::WeightCapacity, &mut self.weight_capacity, capacity);
        Ok(())
    }

    pub fn set_volume_capacity(&mut self, capacity: Option<f64>) -> Result<()> {
        let capacity = checked_quantity("Vehicle", "VolumeCapacity", capacity)?;
        self.changes.assign(VehicleField::VolumeCapacity, &mut self.volume_capacity, capacity);
        Ok(())
    }

    pub fn set_seating_capacity(&mut self, capacity: Option<f64>) -> Result<()> {
        let capacity = checked_quantity("Vehicle", "SeatingCapacity", capacity)?;
        self.changes.assign(
            VehicleField::SeatingCapacity,
            &mut self.seating_capacity,
            capacity,
        );
        Ok(())
    }

    /// Minutes of slack kept between stops.
    pub fn set_buffer(&mut self, minutes: Option<u32>) {
        self.changes.assign(VehicleField::Buffer, &mut self.buffer, minutes);
    }

    pub fn set_avail_from(&mut self, from: Option<u32>) -> Result<()> {
        let from = checked_clock(
            || format!("Vehicle AvailFrom must be between 0 and {MAX_AVAIL_TIME}"),
            from,
            MAX_AVAIL_TIME,
        )?;
        self.changes.assign(VehicleField::AvailFrom, &mut self.avail_from, from);
        Ok(())
    }

    pub fn set_avail_till(&mut self, till: Option<u32>) -> Result<()> {
        let till = checked_clock(
            || format!("Vehicle AvailTill must be between 0 and {MAX_AVAIL_TIME}"),
            till,
            MAX_AVAIL_TIME,
        )?;
        self.changes.assign(VehicleField::AvailTill, &mut self.avail_till, till);
        Ok(())
    }

    pub fn set_return_to_depot(&mut self, return_to_depot: Option<bool>) {
        self.changes.assign(
            VehicleField::ReturnToDepot,
            &mut self.return_to_depot,
            return_to_depot,
        );
    }

    /// Replaces the vehicle type tags. Duplicate tags are dropped, keeping
    /// the first occurrence.
    pub fn set_vehicle_types<I, S>(&mut self, types: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for tag in types {
            let tag = tag.into();
            if !unique.contains(&tag) {
                unique.push(tag);
            }
        }
        self.changes.assign(VehicleField::VehicleTypes, &mut self.vehicle_types, unique);
    }

    /// Adds a vehicle type tag. Returns false if the tag was already present.
    pub fn add_vehicle_type(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.vehicle_types.contains(&tag) {
            return false;
        }
        self.changes.mark(VehicleField::VehicleTypes);
        self.vehicle_types.push(tag);
        true
    }

    /// Removes a vehicle type tag. Returns false if the tag was not present.
    pub fn remove_vehicle_type(&mut self, tag: &str) -> bool {
        let Some(index) = self.vehicle_types.iter().position(|t| t == tag) else {
            return false;
        };
        self.changes.mark(VehicleField::VehicleTypes);
        self.vehicle_types.remove(index);
        true
    }

    /// Merges a service record into this vehicle. Every field is overwritten,
    /// and null fields in the record clear the local value. The change set is
    /// cleared afterwards. On error the vehicle is left untouched.
    pub fn absorb(&mut self, record: &VehicleRecord) -> Result<()> {
        let mut merged = self.clone();
        merged.set_name(&record.name)?;
        merged.set_depot(record.depot.clone());
        merged.set_priority(record.priority);
        merged.set_weight_capacity(record.weight_capacity)?;
        merged.set_volume_capacity(record.volume_capacity)?;
        merged.set_seating_capacity(record.seating_capacity)?;
        merged.set_buffer(record.buffer);
        merged.set_avail_from(record.avail_from)?;
        merged.set_avail_till(record.avail_till)?;
        merged.set_return_to_depot(record.return_to_depot);
        merged.set_vehicle_types(record.vehicle_types.clone().unwrap_or_default());
        merged.changes.clear();
        *self = merged;
        Ok(())
    }
}
