//! Depot model definition.

use super::fields::{checked_coordinate, checked_name, DepotField};
use super::tracker::ChangeSet;
use crate::error::Result;
use crate::wire::DepotRecord;

/// A named, located starting and ending point for vehicle runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Depot {
    name: String,
    address: Option<String>,
    postal_code: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
    is_default: Option<bool>,
    changes: ChangeSet<DepotField>,
}

impl Depot {
    /// Creates a depot with only a name. A locating form must be added
    /// before the depot passes validation.
    pub fn new(name: &str) -> Result<Self> {
        let mut depot = Self {
            name: String::new(),
            address: None,
            postal_code: None,
            lat: None,
            lng: None,
            is_default: None,
            changes: ChangeSet::new(),
        };
        depot.set_name(name)?;
        Ok(depot)
    }

    /// Creates a depot located by street address.
    pub fn with_address(name: &str, address: impl Into<String>) -> Result<Self> {
        let mut depot = Self::new(name)?;
        depot.set_address(Some(address.into()));
        Ok(depot)
    }

    /// Creates a depot located by coordinates.
    pub fn with_coordinates(name: &str, lat: f64, lng: f64) -> Result<Self> {
        let mut depot = Self::new(name)?;
        depot.set_lat(Some(lat))?;
        depot.set_lng(Some(lng))?;
        Ok(depot)
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

    pub fn is_default(&self) -> Option<bool> {
        self.is_default
    }

    /// Fields modified since the last successful round-trip.
    pub fn changes(&self) -> &ChangeSet<DepotField> {
        &self.changes
    }

    pub fn clear_changes(&mut self) {
        self.changes.clear();
    }

    /// Sets the name. Blank or over-long names are rejected and leave the
    /// current name in place.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        let name = checked_name("Depot", name)?;
        self.changes.assign(DepotField::Name, &mut self.name, name);
        Ok(())
    }

    pub fn set_address(&mut self, address: Option<String>) {
        self.changes.assign(DepotField::Address, &mut self.address, address);
    }

    pub fn set_postal_code(&mut self, postal_code: Option<String>) {
        self.changes.assign(DepotField::PostalCode, &mut self.postal_code, postal_code);
    }

    pub fn set_lat(&mut self, lat: Option<f64>) -> Result<()> {
        let lat = checked_coordinate("Depot", "Lat", lat)?;
        self.changes.assign(DepotField::Lat, &mut self.lat, lat);
        Ok(())
    }

    pub fn set_lng(&mut self, lng: Option<f64>) -> Result<()> {
        let lng = checked_coordinate("Depot", "Lng", lng)?;
        self.changes.assign(DepotField::Lng, &mut self.lng, lng);
        Ok(())
    }

    pub fn set_default(&mut self, is_default: Option<bool>) {
        self.changes.assign(DepotField::IsDefault, &mut self.is_default, is_default);
    }

    /// True when the depot carries an address or a complete coordinate pair.
    pub fn is_locatable(&self) -> bool {
        self.address.is_some() || (self.lat.is_some() && self.lng.is_some())
    }

    /// Merges a service record into this depot. Every field is overwritten,
    /// and null fields in the record clear the local value. The change set is
    /// cleared afterwards. On error the depot is left untouched.
    pub fn absorb(&mut self, record: &DepotRecord) -> Result<()> {
        let mut merged = self.clone();
        merged.set_name(&record.name)?;
        merged.set_address(record.address.clone());
        merged.set_postal_code(record.postal_code.clone());
        merged.set_lat(record.lat)?;
        merged.set_lng(record.lng)?;
        merged.set_default(record.is_default);
        merged.changes.clear();
        *self = merged;
        Ok(())
    }
}
