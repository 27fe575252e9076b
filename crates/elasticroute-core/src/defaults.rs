//! Fills unset per-entity fields from plan-level settings.

use log::debug;

use crate::{error::Result, models::Plan};

/// Applies plan-level defaults to every stop and vehicle, in place.
///
/// - unset stop `from`/`till` and vehicle `avail_from`/`avail_till` take the
///   general settings window
/// - an unset or blank `depot` takes the name of the first depot in list
///   order; the depot `default` flag is not consulted
///
/// Values are written through the tracked setters, so defaulted fields are
/// sent with the request. Must run after validation, which guarantees at
/// least one depot.
pub fn apply_defaults(plan: &mut Plan) -> Result<()> {
    let window_from = plan.general_settings.from();
    let window_till = plan.general_settings.till();
    let fallback_depot = plan.depots.first().map(|d| d.name().to_string());

    let needs_depot = |depot: Option<&str>| depot.map_or(true, |d| d.trim().is_empty());

    for stop in &mut plan.stops {
        if stop.from().is_none() {
            stop.set_from(window_from);
        }
        if stop.till().is_none() {
            stop.set_till(window_till);
        }
        if needs_depot(stop.depot()) {
            stop.set_depot(fallback_depot.clone());
        }
    }

    for vehicle in &mut plan.vehicles {
        if vehicle.avail_from().is_none() {
            vehicle.set_avail_from(window_from)?;
        }
        if vehicle.avail_till().is_none() {
            vehicle.set_avail_till(window_till)?;
        }
        if needs_depot(vehicle.depot()) {
            vehicle.set_depot(fallback_depot.clone());
        }
    }

    debug!(
        "Applied defaults to plan {} (fallback depot: {:?})",
        plan.id(),
        fallback_depot
    );
    Ok(())
}
