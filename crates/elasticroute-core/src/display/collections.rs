//! Collection wrapper types for displaying solved routes.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::Plan;

/// Per-vehicle view of a solved plan: each vehicle's stops in run and
/// sequence order, followed by stops that were not assigned.
///
/// ```rust
/// use elasticroute_core::{display::Routes, Plan};
///
/// let plan = Plan::new("TestPlan_1");
/// assert_eq!(Routes(&plan).to_string(), "No routes.\n");
/// ```
pub struct Routes<'a>(pub &'a Plan);

impl fmt::Display for Routes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        if plan.vehicles.is_empty() {
            return writeln!(f, "No routes.");
        }

        for vehicle in &plan.vehicles {
            let route = plan.route_for(vehicle.name());
            writeln!(f, "## {} ({} stops)", vehicle.name(), route.len())?;
            writeln!(f)?;
            for stop in route {
                write!(
                    f,
                    "{}. {}",
                    stop.sequence().unwrap_or_default(),
                    stop.name()
                )?;
                if let Some(run) = stop.run().filter(|run| *run > 1) {
                    write!(f, " (run {run})")?;
                }
                if let Some(eta) = stop.eta() {
                    write!(f, ", ETA {}", LocalDateTime(&eta))?;
                }
                writeln!(f)?;
            }
            writeln!(f)?;
        }

        let unassigned: Vec<&str> = plan
            .stops
            .iter()
            .filter(|s| s.assign_to().is_none())
            .map(|s| s.name())
            .collect();
        if !unassigned.is_empty() {
            writeln!(f, "Unassigned: {}", unassigned.join(", "))?;
        }
        Ok(())
    }
}
