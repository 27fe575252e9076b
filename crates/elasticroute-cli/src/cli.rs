//! Command handlers
//!
//! Each handler reads a plan file into [`PlanInput`], converts it into a
//! validated [`Plan`] and runs one stage of the core pipeline on it. Output
//! is markdown produced by the core display types, rendered through the
//! [`TerminalRenderer`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use elasticroute_core::{
    defaults::apply_defaults,
    display::{OperationStatus, RefreshResult, Routes, SolveResult},
    validate_plan,
    wire::{request_body, request_path},
    Config, Plan, PlanInput, PlanStatus, Solver, SolverBuilder,
};
use log::{debug, info};

use crate::{
    args::{PlanFileArgs, PreviewArgs, RefreshArgs, SolveArgs},
    renderer::TerminalRenderer,
};

/// Configuration given on the command line. Loaded only by commands that
/// talk to the service.
#[derive(Default)]
pub struct ConfigOverrides {
    pub path: Option<PathBuf>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl ConfigOverrides {
    fn load(&self) -> Result<Config> {
        let config = match &self.path {
            Some(path) => Config::load(path)?,
            None => Config::load_default()?,
        };
        Ok(config
            .with_api_key(self.api_key.clone())
            .with_base_url(self.base_url.clone()))
    }
}

pub struct Cli {
    overrides: ConfigOverrides,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(overrides: ConfigOverrides, renderer: TerminalRenderer) -> Self {
        Self {
            overrides,
            renderer,
        }
    }

    pub fn validate(&self, args: &PlanFileArgs) -> Result<()> {
        let plan = load_plan(&args.plan)?;
        validate_plan(&plan).with_context(|| format!("Plan {} is invalid", plan.id()))?;

        let status = OperationStatus::success(format!(
            "Plan {} is valid ({} stops, {} vehicles, {} depots)",
            plan.id(),
            plan.stops.len(),
            plan.vehicles.len(),
            plan.depots.len()
        ));
        self.renderer.render(&status.to_string())
    }

    /// Prints the request path and body without sending anything.
    pub fn preview(&self, args: &PreviewArgs) -> Result<()> {
        let emit = args.emit();
        let mut plan = load_plan(&args.file.plan)?;
        if let Some(connection) = args.connection {
            plan.set_connection_type(connection.into());
        }

        validate_plan(&plan).with_context(|| format!("Plan {} is invalid", plan.id()))?;
        apply_defaults(&mut plan)?;

        let body = request_body(&plan, emit)?;
        println!("POST {}", request_path(&plan));
        println!("{}", serde_json::to_string_pretty(&body)?);
        Ok(())
    }

    pub async fn solve(&self, args: &SolveArgs) -> Result<()> {
        let solver = self.solver()?;
        let mut plan = load_plan(&args.file.plan)?;
        if let Some(connection) = args.connection {
            plan.set_connection_type(connection.into());
        }

        let outcome = solver
            .solve(&mut plan)
            .await
            .with_context(|| format!("Failed to solve plan {}", plan.id()))?;
        info!("Plan {} is {}", plan.id(), plan.status());

        if args.wait && plan.status() != PlanStatus::Planned {
            let planned = solver
                .wait_until_planned(
                    &mut plan,
                    Duration::from_secs(args.interval),
                    args.attempts,
                )
                .await
                .with_context(|| format!("Failed to poll plan {}", plan.id()))?;
            if !planned {
                debug!("Gave up waiting after {} polls", args.attempts);
            }
        }

        if args.routes {
            self.renderer.render(&Routes(&plan).to_string())
        } else {
            self.renderer
                .render(&SolveResult::new(&plan, &outcome).to_string())
        }
    }

    pub async fn refresh(&self, args: &RefreshArgs) -> Result<()> {
        let solver = self.solver()?;
        let mut plan = load_plan(&args.file.plan)?;

        let report = solver
            .refresh(&mut plan)
            .await
            .with_context(|| format!("Failed to refresh plan {}", plan.id()))?;

        if args.routes {
            self.renderer.render(&Routes(&plan).to_string())
        } else {
            self.renderer
                .render(&RefreshResult::new(&plan, &report).to_string())
        }
    }

    fn solver(&self) -> Result<Solver> {
        let config = self.overrides.load().context("Failed to load configuration")?;
        SolverBuilder::new()
            .with_config(config)
            .build()
            .context("Failed to initialize solver")
    }
}

fn load_plan(path: &Path) -> Result<Plan> {
    let input = PlanInput::load(path)
        .with_context(|| format!("Failed to read plan file {}", path.display()))?;
    Ok(Plan::try_from(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_overrides_apply_on_top_of_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"api_key": "from-file", "timeout_secs": 30}"#).unwrap();

        let overrides = ConfigOverrides {
            path: Some(path),
            api_key: Some("from-flag".to_string()),
            base_url: None,
        };
        let config = overrides.load().unwrap();
        assert_eq!(config.api_key.as_deref(), Some("from-flag"));
        assert_eq!(config.timeout_secs, Some(30));
    }

    #[test]
    fn test_load_plan_reports_setter_errors() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("plan.json");
        std::fs::write(
            &path,
            r#"{"id": "P", "vehicles": [{"name": "Van 1", "avail_till": 2400}]}"#,
        )
        .unwrap();

        let err = load_plan(&path).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Vehicle AvailTill must be between 0 and 2359"
        );
    }
}
