//! Field enumerations and shared setter validation.

use super::tracker::Field;
use crate::error::{Result, RouteError};

/// Maximum length of an entity name.
pub const MAX_NAME_LEN: usize = 255;

/// Fields of a [`Depot`](super::Depot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepotField {
    Name,
    Address,
    PostalCode,
    Lat,
    Lng,
    IsDefault,
}

impl Field for DepotField {
    const ALL: &'static [Self] = &[
        DepotField::Name,
        DepotField::Address,
        DepotField::PostalCode,
        DepotField::Lat,
        DepotField::Lng,
        DepotField::IsDefault,
    ];

    fn name(self) -> &'static str {
        match self {
            DepotField::Name => "Name",
            DepotField::Address => "Address",
            DepotField::PostalCode => "PostalCode",
            DepotField::Lat => "Lat",
            DepotField::Lng => "Lng",
            DepotField::IsDefault => "Default",
        }
    }

    fn wire_key(self) -> &'static str {
        match self {
            DepotField::Name => "name",
            DepotField::Address => "address",
            DepotField::PostalCode => "postal_code",
            DepotField::Lat => "lat",
            DepotField::Lng => "lng",
            DepotField::IsDefault => "default",
        }
    }
}

/// Fields of a [`Stop`](super::Stop).
///
/// The trailing result fields are written only by the service and are never
/// marked dirty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopField {
    Name,
    Address,
    PostalCode,
    Lat,
    Lng,
    Depot,
    VehicleType,
    WeightLoad,
    VolumeLoad,
    SeatingLoad,
    ServiceTime,
    From,
    Till,
    AssignTo,
    Run,
    Sequence,
    Eta,
    Exception,
}

impl Field for StopField {
    const ALL: &'static [Self] = &[
        StopField::Name,
        StopField::Address,
        StopField::PostalCode,
        StopField::Lat,
        StopField::Lng,
        StopField::Depot,
        StopField::VehicleType,
        StopField::WeightLoad,
        StopField::VolumeLoad,
        StopField::SeatingLoad,
        StopField::ServiceTime,
        StopField::From,
        StopField::Till,
        StopField::AssignTo,
        StopField::Run,
        StopField::Sequence,
        StopField::Eta,
        StopField::Exception,
    ];

    fn name(self) -> &'static str {
        match self {
            StopField::Name => "Name",
            StopField::Address => "Address",
            StopField::PostalCode => "PostalCode",
            StopField::Lat => "Lat",
            StopField::Lng => "Lng",
            StopField::Depot => "Depot",
            StopField::VehicleType => "VehicleType",
            StopField::WeightLoad => "WeightLoad",
            StopField::VolumeLoad => "VolumeLoad",
            StopField::SeatingLoad => "SeatingLoad",
            StopField::ServiceTime => "ServiceTime",
            StopField::From => "From",
            StopField::Till => "Till",
            StopField::AssignTo => "AssignTo",
            StopField::Run => "Run",
            StopField::Sequence => "Sequence",
            StopField::Eta => "Eta",
            StopField::Exception => "Exception",
        }
    }

    fn wire_key(self) -> &'static str {
        match self {
            StopField::Name => "name",
            StopField::Address => "address",
            StopField::PostalCode => "postal_code",
            StopField::Lat => "lat",
            StopField::Lng => "lng",
            StopField::Depot => "depot",
            StopField::VehicleType => "vehicle_type",
            StopField::WeightLoad => "weight_load",
            StopField::VolumeLoad => "volume_load",
            StopField::SeatingLoad => "seating_load",
            StopField::ServiceTime => "service_time",
            StopField::From => "from",
            StopField::Till => "till",
            StopField::AssignTo => "assign_to",
            StopField::Run => "run",
            StopField::Sequence => "sequence",
            StopField::Eta => "eta",
            StopField::Exception => "exception",
        }
    }
}

/// Fields of a [`Vehicle`](super::Vehicle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleField {
    Name,
    Depot,
    Priority,
    WeightCapacity,
    VolumeCapacity,
    SeatingCapacity,
    Buffer,
    AvailFrom,
    AvailTill,
    ReturnToDepot,
    VehicleTypes,
}

impl Field for VehicleField {
    const ALL: &'static [Self] = &[
        VehicleField::Name,
        VehicleField::Depot,
        VehicleField::Priority,
        VehicleField::WeightCapacity,
        VehicleField::VolumeCapacity,
        VehicleField::SeatingCapacity,
        VehicleField::Buffer,
        VehicleField::AvailFrom,
        VehicleField::AvailTill,
        VehicleField::ReturnToDepot,
        VehicleField::VehicleTypes,
    ];

    fn name(self) -> &'static str {
        match self {
            VehicleField::Name => "Name",
            VehicleField::Depot => "Depot",
            VehicleField::Priority => "Priority",
            VehicleField::WeightCapacity => "WeightCapacity",
            VehicleField::VolumeCapacity => "VolumeCapacity",
            VehicleField::SeatingCapacity => "SeatingCapacity",
            VehicleField::Buffer => "Buffer",
            VehicleField::AvailFrom => "AvailFrom",
            VehicleField::AvailTill => "AvailTill",
            VehicleField::ReturnToDepot => "ReturnToDepot",
            VehicleField::VehicleTypes => "VehicleTypes",
        }
    }

    fn wire_key(self) -> &'static str {
        match self {
            VehicleField::Name => "name",
            VehicleField::Depot => "depot",
            VehicleField::Priority => "priority",
            VehicleField::WeightCapacity => "weight_capacity",
            VehicleField::VolumeCapacity => "volume_capacity",
            VehicleField::SeatingCapacity => "seating_capacity",
            VehicleField::Buffer => "buffer",
            VehicleField::AvailFrom => "avail_from",
            VehicleField::AvailTill => "avail_till",
            VehicleField::ReturnToDepot => "return_to_depot",
            VehicleField::VehicleTypes => "vehicle_types",
        }
    }
}

/// Validates and trims an entity name.
///
/// `kind` is the entity label used in messages (`Stop`, `Vehicle`, `Depot`).
/// The length limit applies to the value as given, before trimming.
pub(crate) fn checked_name(kind: &str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(RouteError::bad_field(format!("{kind} name cannot be null")));
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(RouteError::bad_field(format!(
            "{kind} name cannot be more than {MAX_NAME_LEN} chars"
        )));
    }
    Ok(value.trim().to_string())
}

/// Rejects negative, NaN and infinite quantities. `None` always passes.
pub(crate) fn checked_quantity(
    kind: &str,
    field: &str,
    value: Option<f64>,
) -> Result<Option<f64>> {
    let value = checked_coordinate(kind, field, value)?;
    match value {
        Some(v) if v < 0.0 => Err(RouteError::bad_field(format!(
            "{kind} {field} cannot be negative"
        ))),
        _ => Ok(value),
    }
}

/// Rejects NaN and infinite values, which have no JSON representation.
/// `None` always passes.
pub(crate) fn checked_coordinate(
    kind: &str,
    field: &str,
    value: Option<f64>,
) -> Result<Option<f64>> {
    match value {
        Some(v) if !v.is_finite() => Err(RouteError::bad_field(format!(
            "{kind} {field} must be a finite number"
        ))),
        _ => Ok(value),
    }
}

/// Rejects clock times above `max` (e.g. 2359 or 2400). `None` always passes.
pub(crate) fn checked_clock(
    message: impl FnOnce() -> String,
    value: Option<u32>,
    max: u32,
) -> Result<Option<u32>> {
    match value {
        Some(v) if v > max => Err(RouteError::bad_field(message())),
        _ => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_name_trims() {
        assert_eq!(checked_name("Stop", "  Customer 1 ").unwrap(), "Customer 1");
    }

    #[test]
    fn test_checked_name_rejects_blank_and_long() {
        for blank in ["", " ", "\t\n"] {
            let err = checked_name("Depot", blank).unwrap_err();
            assert_eq!(err.to_string(), "Depot name cannot be null");
        }

        let err = checked_name("Depot", &"A".repeat(256)).unwrap_err();
        assert_eq!(err.to_string(), "Depot name cannot be more than 255 chars");
        assert!(checked_name("Depot", &"A".repeat(255)).is_ok());
    }

    #[test]
    fn test_checked_quantity() {
        assert_eq!(checked_quantity("Stop", "WeightLoad", Some(0.0)).unwrap(), Some(0.0));
        assert_eq!(checked_quantity("Stop", "WeightLoad", None).unwrap(), None);
        let err = checked_quantity("Stop", "WeightLoad", Some(-1.0)).unwrap_err();
        assert_eq!(err.to_string(), "Stop WeightLoad cannot be negative");
        assert!(checked_quantity("Stop", "WeightLoad", Some(f64::NAN)).is_err());
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let err = checked_quantity("Stop", "WeightLoad", Some(f64::INFINITY)).unwrap_err();
        assert_eq!(err.to_string(), "Stop WeightLoad must be a finite number");
        assert!(checked_quantity("Vehicle", "VolumeCapacity", Some(f64::NEG_INFINITY)).is_err());

        let err = checked_coordinate("Depot", "Lat", Some(f64::NAN)).unwrap_err();
        assert_eq!(err.to_string(), "Depot Lat must be a finite number");
        assert_eq!(checked_coordinate("Depot", "Lng", Some(-0.5)).unwrap(), Some(-0.5));
        assert_eq!(checked_coordinate("Depot", "Lng", None).unwrap(), None);
    }

    #[test]
    fn test_wire_keys_are_snake_case() {
        for field in StopField::ALL {
            let key = field.wire_key();
            assert_eq!(key, key.to_lowercase());
            assert!(!key.contains(' '));
        }
        assert_eq!(VehicleField::WeightCapacity.wire_key(), "weight_capacity");
    }
}
