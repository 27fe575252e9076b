//! Submission pipeline for route plans.
//!
//! The [`Solver`] ties the pipeline stages together and talks to the service
//! through a [`Transport`]:
//!
//! ```text
//! ┌────────────┐   ┌────────────┐   ┌────────────┐   ┌───────────┐   ┌────────────┐
//! │  Validate  │──▶│  Defaults  │──▶│ Serialize  │──▶│ Transport │──▶│   Absorb   │
//! │ (validate) │   │ (defaults) │   │   (wire)   │   │           │   │  (absorb)  │
//! └────────────┘   └────────────┘   └────────────┘   └───────────┘   └────────────┘
//! ```
//!
//! Validation aborts on the first violation, before anything is mutated.
//! Defaults are written into the plan's own entities, so a plan that failed
//! after validation (for instance on a transport error) still carries them.
//!
//! The network call is the only suspension point. `solve` and `refresh` take
//! `&mut Plan`, so a plan cannot be shared with another in-flight call.
//!
//! # Example
//!
//! ```rust,no_run
//! use elasticroute_core::{Config, Depot, Plan, SolverBuilder, Stop, Vehicle};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let solver = SolverBuilder::new()
//!     .with_config(Config::default().with_api_key(Some("my-key".to_string())))
//!     .build()?;
//!
//! let mut plan = Plan::new("TestPlan_1234567890");
//! plan.depots.push(Depot::with_address("Main Warehouse", "8 Somapah Road")?);
//! plan.vehicles.push(Vehicle::new("Van 1")?);
//! plan.stops.push(Stop::with_address("Customer 1", "15 Simei Street 4")?);
//! plan.stops.push(Stop::with_address("Customer 2", "59 Changi South Avenue 1")?);
//!
//! solver.solve(&mut plan).await?;
//! println!("{:?}", plan.stop("Customer 1").and_then(|s| s.assign_to()));
//! # Ok(())
//! # }
//! ```

pub mod builder;


use std::time::Duration;

use log::{debug, info};

pub use builder::SolverBuilder;

use crate::{
    absorb::{absorb_response, AbsorbReport},
    config::Config,
    defaults::apply_defaults,
    error::{Result, RouteError},
    models::{ConnectionType, Plan, PlanStatus},
    snapshot::Submission,
    transport::{Method, Transport, TransportRequest, TransportResponse},
    validate::{validate_plan, validate_plan_id},
    wire::{status_path, PlanData, PlanResponse},
};

/// Result of a successful solve call.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// What was sent
    pub submission: Submission,
    /// How the response was reconciled
    pub report: AbsorbReport,
}

/// Submits plans to the routing service and reconciles the responses.
pub struct Solver {
    config: Config,
    transport: Box<dyn Transport>,
}

impl Solver {
    pub(crate) fn new(config: Config, transport: Box<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validates, fills defaults, submits and absorbs the response.
    ///
    /// On success the plan is at least `submitted`, or `planned` when the
    /// connection type is `sync`.
    ///
    /// # Errors
    ///
    /// - `RouteError::BadField` on the first validation failure
    /// - `RouteError::Configuration` when no credential can be resolved
    /// - `RouteError::RemoteRejected` when the service answers with a
    ///   non-success status
    /// - `RouteError::Transport` / `RouteError::Serialization` when the call
    ///   or the response decoding fails
    pub async fn solve(&self, plan: &mut Plan) -> Result<SolveOutcome> {
        validate_plan(plan)?;
        let bearer = self.bearer(plan)?;
        apply_defaults(plan)?;

        let submission = Submission::capture(plan)?;
        info!(
            "Submitting plan {} ({} mode)",
            plan.id(),
            plan.connection_type().as_str()
        );
        let response = self
            .transport
            .send(TransportRequest {
                method: Method::Post,
                path: submission.path().to_string(),
                bearer,
                body: Some(submission.body().clone()),
            })
            .await?;

        let data = decode(response)?;
        let report = absorb_response(plan, &data)?;
        let reached = match plan.connection_type() {
            ConnectionType::Sync => PlanStatus::Planned,
            ConnectionType::Poll | ConnectionType::Webhook => PlanStatus::Submitted,
        };
        plan.advance_status(reached);

        Ok(SolveOutcome { submission, report })
    }

    /// Fetches the current server state of a submitted plan and absorbs it.
    /// May move the plan from `submitted` to `planned`, never backwards.
    pub async fn refresh(&self, plan: &mut Plan) -> Result<AbsorbReport> {
        validate_plan_id(plan)?;
        let bearer = self.bearer(plan)?;

        debug!("Refreshing plan {}", plan.id());
        let response = self
            .transport
            .send(TransportRequest {
                method: Method::Get,
                path: status_path(plan),
                bearer,
                body: None,
            })
            .await?;

        let data = decode(response)?;
        absorb_response(plan, &data)
    }

    /// Refreshes the plan every `interval` until it is `planned`, for at most
    /// `max_attempts` refreshes. Returns whether the plan got planned.
    pub async fn wait_until_planned(
        &self,
        plan: &mut Plan,
        interval: Duration,
        max_attempts: u32,
    ) -> Result<bool> {
        for attempt in 1..=max_attempts {
            if plan.status() == PlanStatus::Planned {
                return Ok(true);
            }
            tokio::time::sleep(interval).await;
            self.refresh(plan).await?;
            debug!(
                "Poll {attempt}/{max_attempts} for plan {}: {} ({}%)",
                plan.id(),
                plan.status().as_str(),
                plan.progress()
            );
        }
        Ok(plan.status() == PlanStatus::Planned)
    }

    fn bearer(&self, plan: &Plan) -> Result<String> {
        plan.resolve_api_key(self.config.api_key.as_deref())
            .map(str::to_string)
            .ok_or_else(|| RouteError::Configuration {
                message: format!("No API key configured for plan {}", plan.id()),
            })
    }
}

/// Turns a raw response into decoded plan data, rejecting non-success
/// statuses with their raw body.
fn decode(response: TransportResponse) -> Result<PlanData> {
    if !response.is_success() {
        return Err(RouteError::remote(response.status, response.body));
    }
    let decoded: PlanResponse = serde_json::from_str(&response.body)?;
    Ok(decoded.data)
}
