//! Display implementations for domain models.
//!
//! Plans render as markdown: a header with the server state, one section per
//! entity list, and a stop table that includes the solve results once the
//! service has assigned them.

use std::fmt;

use super::datetime::{ClockTime, LocalDateTime};
use crate::models::{ConnectionType, Depot, DistanceUnit, Plan, PlanStatus, Stop, Vehicle};

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PlanStatus {
    /// Status text prefixed with a marker for terminal output.
    pub fn with_icon(&self) -> String {
        let icon = match self {
            PlanStatus::Unsubmitted => "[ ]",
            PlanStatus::Submitted => "[~]",
            PlanStatus::Planned => "[x]",
        };
        format!("{icon} {}", self.as_str())
    }
}

fn or_dash<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn location(address: Option<&str>, lat: Option<f64>, lng: Option<f64>) -> String {
    match (address, lat, lng) {
        (Some(address), _, _) => address.to_string(),
        (None, Some(lat), Some(lng)) => format!("{lat}, {lng}"),
        _ => "-".to_string(),
    }
}

fn window(from: Option<u32>, till: Option<u32>) -> String {
    match (from, till) {
        (None, None) => "-".to_string(),
        (from, till) => format!(
            "{}-{}",
            or_dash(from.map(ClockTime)),
            or_dash(till.map(ClockTime))
        ),
    }
}

impl fmt::Display for Depot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- **{}**: {}",
            self.name(),
            location(self.address(), self.lat(), self.lng())
        )?;
        if self.is_default() == Some(true) {
            write!(f, " (default)")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}**", self.name())?;
        if let Some(depot) = self.depot() {
            write!(f, " from {depot}")?;
        }
        if self.avail_from().is_some() || self.avail_till().is_some() {
            write!(f, ", {}", window(self.avail_from(), self.avail_till()))?;
        }
        if !self.vehicle_types().is_empty() {
            write!(f, " [{}]", self.vehicle_types().join(", "))?;
        }
        writeln!(f)
    }
}

impl Stop {
    fn fmt_row(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let eta = self
            .eta()
            .map(|ts| LocalDateTime(&ts).to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            f,
            "| {} | {} | {} | {} | {} | {} | {} |",
            self.name(),
            location(self.address(), self.lat(), self.lng()),
            window(self.from(), self.till()),
            or_dash(self.assign_to()),
            or_dash(self.run()),
            or_dash(self.sequence()),
            eta
        )
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Plan {}", self.id())?;
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.status().with_icon())?;
        writeln!(f, "- Connection: {}", self.connection_type())?;
        if self.status() != PlanStatus::Unsubmitted {
            writeln!(f, "- Progress: {}%", self.progress())?;
        }
        if let Some(submitted) = self.submitted_at() {
            writeln!(f, "- Submitted: {}", LocalDateTime(&submitted))?;
        }

        writeln!(f, "\n## Depots")?;
        writeln!(f)?;
        if self.depots.is_empty() {
            writeln!(f, "No depots.")?;
        }
        for depot in &self.depots {
            write!(f, "{depot}")?;
        }

        writeln!(f, "\n## Vehicles")?;
        writeln!(f)?;
        if self.vehicles.is_empty() {
            writeln!(f, "No vehicles.")?;
        }
        for vehicle in &self.vehicles {
            write!(f, "{vehicle}")?;
        }

        writeln!(f, "\n## Stops")?;
        writeln!(f)?;
        if self.stops.is_empty() {
            return writeln!(f, "No stops.");
        }
        writeln!(f, "| Stop | Location | Window | Vehicle | Run | Seq | ETA |")?;
        writeln!(f, "|---|---|---|---|---|---|---|")?;
        for stop in &self.stops {
            stop.fmt_row(f)?;
        }

        let exceptions: Vec<(&str, &str)> = self
            .stops
            .iter()
            .filter_map(|s| s.exception().map(|e| (s.name(), e)))
            .collect();
        if !exceptions.is_empty() {
            writeln!(f, "\n## Exceptions")?;
            writeln!(f)?;
            for (name, exception) in exceptions {
                writeln!(f, "- {name}: {exception}")?;
            }
        }

        Ok(())
    }
}
