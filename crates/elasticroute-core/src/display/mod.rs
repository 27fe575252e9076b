//! Display formatting for plans and pipeline results.
//!
//! Domain models implement `Display` directly; wrapper types cover views
//! that combine several values, such as a plan together with the report of
//! the solve that produced it. All output is markdown so the CLI can render
//! it with styling.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │ (Plan, Stop...) │───▶│ (SolveResult,   │───▶│     Output      │
//! │                 │    │  Routes, ...)   │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for domain models
//! - [`collections`]: Per-vehicle route listing ([`Routes`])
//! - [`results`]: Solve and refresh outcomes
//! - [`status`]: One-line success and failure messages
//! - [`datetime`]: Timestamp and clock value formatting
//!
//! ## Usage Examples
//!
//! ```rust
//! use elasticroute_core::{display::OperationStatus, Depot, Plan};
//!
//! let mut plan = Plan::new("TestPlan_1");
//! plan.depots.push(Depot::with_address("Main Warehouse", "8 Somapah Road")?);
//!
//! let output = format!("{plan}");
//! assert!(output.contains("- **Main Warehouse**: 8 Somapah Road"));
//!
//! let status = OperationStatus::success(format!("Plan {} is valid", plan.id()));
//! println!("{status}");
//! # Ok::<(), elasticroute_core::RouteError>(())
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Routes;
pub use datetime::{ClockTime, LocalDateTime};
pub use results::{RefreshResult, SolveResult};
pub use status::OperationStatus;
