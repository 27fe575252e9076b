//! Client library for the ElasticRoute vehicle routing service.
//!
//! A [`Plan`] collects stops, vehicles and depots. The [`Solver`] validates
//! it, fills per-entity defaults from the plan settings, sends only the
//! fields that changed since the last round-trip, and merges the service's
//! answer (vehicle assignments, run and sequence numbers, ETAs) back into the
//! same entities.
//!
//! # Module Overview
//!
//! - [`models`]: Validated entities with per-field change tracking
//! - [`validate`]: Collection rules checked before submission
//! - [`defaults`]: Plan-level defaults written into entities
//! - [`wire`]: Differential request serialization and response records
//! - [`absorb`]: Reconciliation of responses into local entities
//! - [`snapshot`]: Record of exactly what was submitted
//! - [`transport`]: The network seam, with an HTTP implementation
//! - [`solver`]: The pipeline tying the stages together
//! - [`display`]: Markdown rendering for plans and results
//! - [`params`]: Plan file input types
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use elasticroute_core::{display::Routes, Config, Depot, Plan, SolverBuilder, Stop, Vehicle};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let solver = SolverBuilder::new()
//!     .with_config(Config::load_default()?.with_api_key(Some("my-key".to_string())))
//!     .build()?;
//!
//! let mut plan = Plan::new("TestPlan_1234567890");
//! plan.depots.push(Depot::with_address("Main Warehouse", "8 Somapah Road")?);
//! plan.vehicles.push(Vehicle::new("Van 1")?);
//! plan.stops.push(Stop::with_address("Customer 1", "15 Simei Street 4")?);
//! plan.stops.push(Stop::with_address("Customer 2", "59 Changi South Avenue 1")?);
//!
//! solver.solve(&mut plan).await?;
//! println!("{}", Routes(&plan));
//! # Ok(())
//! # }
//! ```

pub mod absorb;
pub mod config;
pub mod defaults;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod snapshot;
pub mod solver;
pub mod transport;
pub mod validate;
pub mod wire;

// Re-export commonly used types
pub use absorb::{absorb_response, AbsorbReport};
pub use config::Config;
pub use display::{LocalDateTime, OperationStatus, RefreshResult, Routes, SolveResult};
pub use error::{Result, RouteError};
pub use models::{
    ConnectionType, Depot, DistanceUnit, GeneralSettings, Plan, PlanStatus, Stop, Vehicle,
};
pub use params::PlanInput;
pub use snapshot::Submission;
pub use solver::{SolveOutcome, Solver, SolverBuilder};
#[cfg(feature = "http")]
pub use transport::HttpTransport;
pub use transport::{Transport, TransportRequest, TransportResponse};
pub use validate::validate_plan;
