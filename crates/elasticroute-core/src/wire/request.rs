//! Differential serialization of a plan into its request body.

use serde_json::{json, Map, Value};

use crate::{
    error::Result,
    models::{
        ChangeSet, Depot, DepotField, Field, GeneralSettings, Plan, Stop, StopField, Vehicle,
        VehicleField,
    },
};

/// Which fields of a change-tracked entity are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emit {
    /// Only fields recorded in the entity's change set
    #[default]
    Changed,
    /// Every field with a value, regardless of the change set
    All,
}

/// An entity whose fields are emitted individually on the wire.
pub trait WireEntity {
    type Field: Field;

    fn changes(&self) -> &ChangeSet<Self::Field>;

    /// The wire value of `field`, or `None` when the field is unset.
    fn field_value(&self, field: Self::Field) -> Option<Value>;
}

impl WireEntity for Depot {
    type Field = DepotField;

    fn changes(&self) -> &ChangeSet<DepotField> {
        Depot::changes(self)
    }

    fn field_value(&self, field: DepotField) -> Option<Value> {
        match field {
            DepotField::Name => Some(json!(self.name())),
            DepotField::Address => self.address().map(|v| json!(v)),
            DepotField::PostalCode => self.postal_code().map(|v| json!(v)),
            DepotField::Lat => self.lat().map(|v| json!(v)),
            DepotField::Lng => self.lng().map(|v| json!(v)),
            DepotField::IsDefault => self.is_default().map(|v| json!(v)),
        }
    }
}

impl WireEntity for Stop {
    type Field = StopField;

    fn changes(&self) -> &ChangeSet<StopField> {
        Stop::changes(self)
    }

    fn field_value(&self, field: StopField) -> Option<Value> {
        match field {
            StopField::Name => Some(json!(self.name())),
            StopField::Address => self.address().map(|v| json!(v)),
            StopField::PostalCode => self.postal_code().map(|v| json!(v)),
            StopField::Lat => self.lat().map(|v| json!(v)),
            StopField::Lng => self.lng().map(|v| json!(v)),
            StopField::Depot => self.depot().map(|v| json!(v)),
            StopField::VehicleType => self.vehicle_type().map(|v| json!(v)),
            StopField::WeightLoad => self.weight_load().map(|v| json!(v)),
            StopField::VolumeLoad => self.volume_load().map(|v| json!(v)),
            StopField::SeatingLoad => self.seating_load().map(|v| json!(v)),
            StopField::ServiceTime => self.service_time().map(|v| json!(v)),
            StopField::From => self.from().map(|v| json!(v)),
            StopField::Till => self.till().map(|v| json!(v)),
            StopField::AssignTo => self.assign_to().map(|v| json!(v)),
            StopField::Run => self.run().map(|v| json!(v)),
            StopField::Sequence => self.sequence().map(|v| json!(v)),
            StopField::Eta => self.eta().map(|v| json!(v.to_string())),
            StopField::Exception => self.exception().map(|v| json!(v)),
        }
    }
}

impl WireEntity for Vehicle {
    type Field = VehicleField;

    fn changes(&self) -> &ChangeSet<VehicleField> {
        Vehicle::changes(self)
    }

    fn field_value(&self, field: VehicleField) -> Option<Value> {
        match field {
            VehicleField::Name => Some(json!(self.name())),
            VehicleField::Depot => self.depot().map(|v| json!(v)),
            VehicleField::Priority => self.priority().map(|v| json!(v)),
            VehicleField::WeightCapacity => self.weight_capacity().map(|v| json!(v)),
            VehicleField::VolumeCapacity => self.volume_capacity().map(|v| json!(v)),
            VehicleField::SeatingCapacity => self.seating_capacity().map(|v| json!(v)),
            VehicleField::Buffer => self.buffer().map(|v| json!(v)),
            VehicleField::AvailFrom => self.avail_from().map(|v| json!(v)),
            VehicleField::AvailTill => self.avail_till().map(|v| json!(v)),
            VehicleField::ReturnToDepot => self.return_to_depot().map(|v| json!(v)),
            VehicleField::VehicleTypes => Some(json!(self.vehicle_types())),
        }
    }
}

/// Serializes one entity. Unset fields are omitted, never sent as `null`.
///
/// With [`Emit::Changed`] a field is emitted only if it is in the entity's
/// change set, so a freshly built entity sends everything that was set and
/// an entity whose changes were cleared sends only later modifications.
pub fn entity_json<E: WireEntity>(entity: &E, emit: Emit) -> Value {
    let mut map = Map::new();
    for &field in E::Field::ALL {
        if emit == Emit::Changed && !entity.changes().contains(field) {
            continue;
        }
        if let Some(value) = entity.field_value(field) {
            map.insert(field.wire_key().to_string(), value);
        }
    }
    Value::Object(map)
}

/// Serializes the general settings block. Settings are never filtered by
/// change tracking.
pub fn settings_json(settings: &GeneralSettings) -> Result<Value> {
    Ok(serde_json::to_value(settings)?)
}

/// Builds the full request body for a plan:
/// `{ id, stops, vehicles, depots, general_settings }`.
pub fn request_body(plan: &Plan, emit: Emit) -> Result<Value> {
    let stops: Vec<Value> = plan.stops.iter().map(|s| entity_json(s, emit)).collect();
    let vehicles: Vec<Value> = plan.vehicles.iter().map(|v| entity_json(v, emit)).collect();
    let depots: Vec<Value> = plan.depots.iter().map(|d| entity_json(d, emit)).collect();

    Ok(json!({
        "id": plan.id(),
        "stops": stops,
        "vehicles": vehicles,
        "depots": depots,
        "general_settings": settings_json(&plan.general_settings)?,
    }))
}

/// Request path for a plan, relative to the service base address, including
/// the connection-mode query parameter.
pub fn request_path(plan: &Plan) -> String {
    let mut path = format!("plan/{}", plan.id());
    if let Some(query) = plan.connection_type().query() {
        path.push('?');
        path.push_str(query);
    }
    path
}

/// Path used to fetch the current state of a plan. Refresh never carries a
/// connection-mode parameter.
pub fn status_path(plan: &Plan) -> String {
    format!("plan/{}", plan.id())
}
