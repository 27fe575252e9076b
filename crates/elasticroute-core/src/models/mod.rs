//! Data models for route plans.
//!
//! This module contains the domain models submitted to the routing service:
//! [`Plan`] is the aggregate root holding ordered lists of [`Stop`]s,
//! [`Vehicle`]s and [`Depot`]s plus a [`GeneralSettings`] block.
//!
//! # Validating setters
//!
//! Entity fields are private and changed through setters that enforce
//! field-level invariants immediately:
//!
//! - names are trimmed, non-blank and at most 255 characters
//! - loads and capacities are never negative
//! - vehicle availability times stay within 0..=2359, plan-wide window
//!   times within 0..=2400
//!
//! A rejected value leaves the entity unchanged, so an invalid entity cannot
//! be constructed.
//!
//! # Change tracking
//!
//! Stops, vehicles and depots carry a [`ChangeSet`] of the fields modified
//! since the last successful round-trip. A setter records its field only when
//! the value actually changes. The differential serializer in
//! [`crate::wire`] emits just those fields, and reconciliation clears the set.
//!
//! ```rust
//! use elasticroute_core::models::{Stop, StopField};
//!
//! let mut stop = Stop::with_address("Customer 1", "15 Simei Street 4")?;
//! assert!(stop.changes().contains(StopField::Address));
//!
//! stop.clear_changes();
//! stop.set_weight_load(Some(12.5))?;
//! assert_eq!(stop.changes().names(), vec!["WeightLoad"]);
//!
//! assert!(stop.set_volume_load(Some(-1.0)).is_err());
//! # Ok::<(), elasticroute_core::RouteError>(())
//! ```

pub mod depot;
pub mod fields;
pub mod plan;
pub mod settings;
pub mod status;
pub mod stop;
pub mod tracker;
pub mod vehicle;

#[cfg(test)]
mod tests;

pub use depot::Depot;
pub use fields::{DepotField, StopField, VehicleField, MAX_NAME_LEN};
pub use plan::Plan;
pub use settings::{GeneralSettings, MAX_WINDOW_TIME};
pub use status::{ConnectionType, DistanceUnit, PlanStatus};
pub use stop::Stop;
pub use tracker::{ChangeSet, Field};
pub use vehicle::{Vehicle, MAX_AVAIL_TIME};
