//! Reconciliation of service responses into local plan entities.

use log::{debug, warn};

use crate::{
    error::Result,
    models::{Plan, PlanStatus},
    wire::PlanData,
};

/// Outcome counts of one reconciliation pass.
///
/// Records with no local entity of the same name are skipped; the
/// `unmatched_*` counts make that visible to callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbsorbReport {
    pub merged_stops: usize,
    pub merged_vehicles: usize,
    pub merged_depots: usize,
    pub unmatched_stops: usize,
    pub unmatched_vehicles: usize,
    pub unmatched_depots: usize,
}

impl AbsorbReport {
    /// Total number of records that matched no local entity.
    pub fn unmatched(&self) -> usize {
        self.unmatched_stops + self.unmatched_vehicles + self.unmatched_depots
    }
}

/// Merges a decoded response into `plan`.
///
/// Each stop, vehicle and depot record is matched to the local entity with
/// the exact same name and merged totally (null fields clear local values),
/// which also clears that entity's change set. Afterwards the plan takes the
/// response's progress, stage, id and submission time. The status only ever
/// moves forward.
///
/// Either the whole response is absorbed or, on error, the plan is left
/// unchanged.
pub fn absorb_response(plan: &mut Plan, data: &PlanData) -> Result<AbsorbReport> {
    let mut merged = plan.clone();
    let mut report = AbsorbReport::default();

    for record in &data.details.stops {
        match merged.stops.iter_mut().find(|s| s.name() == record.name) {
            Some(stop) => {
                stop.absorb(record)?;
                report.merged_stops += 1;
            }
            None => {
                warn!("Ignoring stop record '{}' with no local stop", record.name);
                report.unmatched_stops += 1;
            }
        }
    }

    for record in &data.details.vehicles {
        match merged.vehicles.iter_mut().find(|v| v.name() == record.name) {
            Some(vehicle) => {
                vehicle.absorb(record)?;
                report.merged_vehicles += 1;
            }
            None => {
                warn!(
                    "Ignoring vehicle record '{}' with no local vehicle",
                    record.name
                );
                report.unmatched_vehicles += 1;
            }
        }
    }

    for record in &data.details.depots {
        match merged.depots.iter_mut().find(|d| d.name() == record.name) {
            Some(depot) => {
                depot.absorb(record)?;
                report.merged_depots += 1;
            }
            None => {
                warn!("Ignoring depot record '{}' with no local depot", record.name);
                report.unmatched_depots += 1;
            }
        }
    }

    let progress = match data.progress {
        Some(p) if p > 100 => {
            warn!("Clamping out-of-range progress {p} to 100");
            100
        }
        Some(p) => p as u8,
        None => merged.progress(),
    };
    merged.set_server_state(data.plan_id.clone(), progress, data.submitted);

    if let Some(stage) = &data.stage {
        match stage.parse::<PlanStatus>() {
            Ok(status) => {
                merged.advance_status(status);
            }
            Err(e) => warn!("{e}; keeping status {}", merged.status().as_str()),
        }
    }

    debug!(
        "Absorbed response for plan {}: {:?}",
        merged.id(),
        report
    );
    *plan = merged;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Depot, Stop, Vehicle};
    use crate::wire::{PlanDetails, StopRecord, VehicleRecord};

    fn plan() -> Plan {
        let mut plan = Plan::new("TestPlan_1");
        plan.depots
            .push(Depot::with_address("Main Warehouse", "8 Somapah Road").unwrap());
        plan.vehicles.push(Vehicle::new("Van 1").unwrap());
        plan.stops
            .push(Stop::with_address("Customer 1", "15 Simei Street 4").unwrap());
        plan.stops
            .push(Stop::with_address("Customer 2", "59 Changi South Avenue 1").unwrap());
        plan
    }

    fn stop_record(name: &str) -> StopRecord {
        StopRecord {
            name: name.to_string(),
            address: Some("15 Simei Street 4".to_string()),
            assign_to: Some("Van 1".to_string()),
            run: Some(1),
            sequence: Some(1),
            ..Default::default()
        }
    }

    fn data(stage: &str, stops: Vec<StopRecord>) -> PlanData {
        PlanData {
            plan_id: Some("TestPlan_1".to_string()),
            stage: Some(stage.to_string()),
            progress: Some(100),
            submitted: None,
            details: PlanDetails {
                stops,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_merges_results_and_clears_changes() {
        let mut plan = plan();
        let report = absorb_response(&mut plan, &data("planned", vec![stop_record("Customer 1")]))
            .unwrap();

        let stop = plan.stop("Customer 1").unwrap();
        assert_eq!(stop.assign_to(), Some("Van 1"));
        assert_eq!(stop.run(), Some(1));
        assert_eq!(stop.sequence(), Some(1));
        assert!(stop.changes().is_empty());

        // Untouched entities keep their change sets.
        assert!(!plan.stop("Customer 2").unwrap().changes().is_empty());

        assert_eq!(plan.status(), PlanStatus::Planned);
        assert_eq!(plan.progress(), 100);
        assert_eq!(report.merged_stops, 1);
        assert_eq!(report.unmatched(), 0);
    }

    #[test]
    fn test_absorb_is_idempotent() {
        let mut once = plan();
        let response = data("planned", vec![stop_record("Customer 1")]);
        absorb_response(&mut once, &response).unwrap();

        let mut twice = once.clone();
        absorb_response(&mut twice, &response).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_null_fields_clear_local_values() {
        let mut plan = plan();
        plan.stops[0].set_weight_load(Some(20.0)).unwrap();

        let mut record = stop_record("Customer 1");
        record.weight_load = None;
        absorb_response(&mut plan, &data("planned", vec![record])).unwrap();

        assert_eq!(plan.stops[0].weight_load(), None);
    }

    #[test]
    fn test_unmatched_records_are_counted_and_ignored() {
        let mut plan = plan();
        let mut response = data("submitted", vec![stop_record("Customer 99")]);
        response.details.vehicles.push(VehicleRecord {
            name: "Van 99".to_string(),
            ..Default::default()
        });

        let report = absorb_response(&mut plan, &response).unwrap();
        assert_eq!(report.unmatched_stops, 1);
        assert_eq!(report.unmatched_vehicles, 1);
        assert_eq!(report.unmatched(), 2);
        assert_eq!(plan.stops[0].assign_to(), None);
    }

    #[test]
    fn test_status_never_moves_backwards() {
        let mut plan = plan();
        absorb_response(&mut plan, &data("planned", vec![])).unwrap();
        absorb_response(&mut plan, &data("submitted", vec![])).unwrap();
        assert_eq!(plan.status(), PlanStatus::Planned);
    }

    #[test]
    fn test_invalid_record_leaves_plan_untouched() {
        let mut plan = plan();
        let before = plan.clone();

        let mut bad = stop_record("Customer 2");
        bad.weight_load = Some(-5.0);
        let response = data("planned", vec![stop_record("Customer 1"), bad]);

        let err = absorb_response(&mut plan, &response).unwrap_err();
        assert!(err.is_bad_field());
        assert_eq!(plan, before);
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        let mut plan = plan();
        let mut response = data("submitted", vec![]);
        response.progress = Some(250);
        absorb_response(&mut plan, &response).unwrap();
        assert_eq!(plan.progress(), 100);
    }
}
