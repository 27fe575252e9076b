//! Collection-level validation run before a plan is submitted.
//!
//! Each validator returns `Ok(true)` or the first violation it finds as a
//! `BadField` error. Name comparison is exact and case-sensitive.

use log::debug;

use crate::{
    error::{Result, RouteError},
    models::{Depot, Plan, Stop, Vehicle},
};

/// Returns true when more than one item carries `name`.
fn is_duplicated<'a, I>(names: I, name: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().filter(|n| *n == name).count() > 1
}

/// Requires at least one depot, distinct names, and an address or full
/// coordinate pair on every depot.
pub fn validate_depots(depots: &[Depot]) -> Result<bool> {
    if depots.is_empty() {
        return Err(RouteError::bad_field("You must have at least one depot"));
    }
    for depot in depots {
        if is_duplicated(depots.iter().map(Depot::name), depot.name()) {
            return Err(RouteError::bad_field("Depot name must be distinct"));
        }
        if !depot.is_locatable() {
            return Err(RouteError::bad_field("Depot address and coordinates are not given"));
        }
    }
    Ok(true)
}

/// Requires at least two stops, distinct names, and an address or full
/// coordinate pair on every stop.
pub fn validate_stops(stops: &[Stop]) -> Result<bool> {
    if stops.len() < 2 {
        return Err(RouteError::bad_field("You must have at least two stops"));
    }
    for stop in stops {
        if is_duplicated(stops.iter().map(Stop::name), stop.name()) {
            return Err(RouteError::bad_field("Stop name must be distinct"));
        }
        if !stop.is_locatable() {
            return Err(RouteError::bad_field("Stop address and coordinates are not given"));
        }
    }
    Ok(true)
}

/// Requires at least one vehicle and distinct names. Vehicles start from a
/// depot, so no location is checked.
pub fn validate_vehicles(vehicles: &[Vehicle]) -> Result<bool> {
    if vehicles.is_empty() {
        return Err(RouteError::bad_field("You must have at least one vehicle"));
    }
    for vehicle in vehicles {
        if is_duplicated(vehicles.iter().map(Vehicle::name), vehicle.name()) {
            return Err(RouteError::bad_field("Vehicle name must be distinct"));
        }
    }
    Ok(true)
}

/// Characters that would change the meaning of the request path.
const RESERVED_ID_CHARS: [char; 3] = ['/', '?', '#'];

/// Requires a non-blank plan identifier that can be placed in a URL path
/// segment as is.
pub fn validate_plan_id(plan: &Plan) -> Result<()> {
    if plan.id().trim().is_empty() {
        return Err(RouteError::bad_field("You need to create an id for this plan!"));
    }
    if plan.id().contains(RESERVED_ID_CHARS) {
        return Err(RouteError::bad_field("Plan id cannot contain '/', '?' or '#'"));
    }
    Ok(())
}

/// Validates a whole plan in submission order: id, stops, depots, vehicles.
/// The first violation aborts.
pub fn validate_plan(plan: &Plan) -> Result<bool> {
    validate_plan_id(plan)?;
    validate_stops(&plan.stops)?;
    validate_depots(&plan.depots)?;
    validate_vehicles(&plan.vehicles)?;
    debug!(
        "Plan {} passed validation ({} stops, {} vehicles, {} depots)",
        plan.id(),
        plan.stops.len(),
        plan.vehicles.len(),
        plan.depots.len()
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(name: &str) -> Stop {
        Stop::with_address(name, "61 Kaki Bukit Ave 1").unwrap()
    }

    fn depot(name: &str) -> Depot {
        Depot::with_address(name, "8 Somapah Road").unwrap()
    }

    fn message(result: Result<bool>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn test_stop_minimum_is_two() {
        assert_eq!(message(validate_stops(&[])), "You must have at least two stops");
        assert_eq!(
            message(validate_stops(&[stop("Customer 1")])),
            "You must have at least two stops"
        );
        assert!(validate_stops(&[stop("Customer 1"), stop("Customer 2")]).unwrap());
    }

    #[test]
    fn test_depot_and_vehicle_minimum_is_one() {
        assert_eq!(message(validate_depots(&[])), "You must have at least one depot");
        assert!(validate_depots(&[depot("Main Warehouse")]).unwrap());

        assert_eq!(
            message(validate_vehicles(&[])),
            "You must have at least one vehicle"
        );
        assert!(validate_vehicles(&[Vehicle::new("Van 1").unwrap()]).unwrap());
    }

    #[test]
    fn test_names_must_be_distinct() {
        let mut stops = vec![stop("first"), stop("bad"), stop("bad")];
        assert_eq!(message(validate_stops(&stops)), "Stop name must be distinct");

        stops[2].set_name("good").unwrap();
        assert!(validate_stops(&stops).unwrap());

        let depots = vec![depot("bad"), depot("bad")];
        assert_eq!(message(validate_depots(&depots)), "Depot name must be distinct");

        let vehicles = vec![Vehicle::new("bad").unwrap(), Vehicle::new("bad").unwrap()];
        assert_eq!(
            message(validate_vehicles(&vehicles)),
            "Vehicle name must be distinct"
        );
    }

    #[test]
    fn test_name_comparison_is_case_sensitive() {
        assert!(validate_stops(&[stop("Customer"), stop("customer")]).unwrap());
    }

    #[test]
    fn test_location_is_required() {
        let mut stops = vec![stop("Customer 1"), stop("Customer 2")];
        stops[0].set_address(None);
        assert_eq!(
            message(validate_stops(&stops)),
            "Stop address and coordinates are not given"
        );

        stops[0].set_lat(Some(1.336_888_888_888_888_8)).unwrap();
        assert!(validate_stops(&stops).is_err());

        stops[0].set_lng(Some(103.910_861_111_111_12)).unwrap();
        assert!(validate_stops(&stops).unwrap());

        let mut depots = vec![depot("Main Warehouse")];
        depots[0].set_address(None);
        assert_eq!(
            message(validate_depots(&depots)),
            "Depot address and coordinates are not given"
        );
    }

    #[test]
    fn test_plan_validation_order() {
        let mut plan = Plan::new("TestPlan_1");
        // Everything is empty: stops are reported first.
        assert_eq!(message(validate_plan(&plan)), "You must have at least two stops");

        plan.stops.push(stop("Customer 1"));
        plan.stops.push(stop("Customer 2"));
        assert_eq!(message(validate_plan(&plan)), "You must have at least one depot");

        plan.depots.push(depot("Main Warehouse"));
        assert_eq!(
            message(validate_plan(&plan)),
            "You must have at least one vehicle"
        );

        plan.vehicles.push(Vehicle::new("Van 1").unwrap());
        assert!(validate_plan(&plan).unwrap());

        plan.set_id("  ");
        assert!(validate_plan(&plan).unwrap_err().is_bad_field());
    }

    #[test]
    fn test_plan_id_cannot_reshape_request_path() {
        for id in ["../other", "plan?c=sync", "plan#frag", "a/b"] {
            let plan = Plan::new(id);
            let err = validate_plan_id(&plan).unwrap_err();
            assert_eq!(err.to_string(), "Plan id cannot contain '/', '?' or '#'");
        }
        assert!(validate_plan_id(&Plan::new("TestPlan_1234567890")).is_ok());
        assert!(validate_plan_id(&Plan::new("Plan-2024.06 A")).is_ok());
    }
}
