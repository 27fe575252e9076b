//! Wire representation of plans.
//!
//! Requests are built explicitly from the entity graph so that change-tracked
//! entities emit only their dirty fields (see [`request::Emit`]). Responses
//! are decoded with serde into plain record types which reconciliation then
//! merges into the local entities.
//!
//! Every field uses a fixed lower-snake-case key, and unset values are left
//! out of the body instead of being sent as `null`.

pub mod request;
pub mod response;

pub use request::{
    entity_json, request_body, request_path, settings_json, status_path, Emit, WireEntity,
};
pub use response::{DepotRecord, PlanData, PlanDetails, PlanResponse, StopRecord, VehicleRecord};
