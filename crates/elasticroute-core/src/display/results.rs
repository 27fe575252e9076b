//! Result wrapper types for displaying pipeline outcomes.

use std::fmt;

use crate::{absorb::AbsorbReport, models::Plan, solver::SolveOutcome};

/// Renders a plan after a solve: a confirmation line, the plan itself and
/// any response records that matched nothing locally.
///
/// # Examples
///
/// ```rust,ignore
/// let outcome = solver.solve(&mut plan).await?;
/// println!("{}", SolveResult::new(&plan, &outcome));
/// ```
pub struct SolveResult<'a> {
    pub plan: &'a Plan,
    pub outcome: &'a SolveOutcome,
}

impl<'a> SolveResult<'a> {
    pub fn new(plan: &'a Plan, outcome: &'a SolveOutcome) -> Self {
        Self { plan, outcome }
    }
}

impl fmt::Display for SolveResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Submitted plan {} with {} stops, {} vehicles and {} depots.",
            self.outcome.submission.id(),
            self.outcome.submission.stops().len(),
            self.outcome.submission.vehicles().len(),
            self.outcome.submission.depots().len()
        )?;
        writeln!(f)?;
        write!(f, "{}", self.plan)?;
        write!(f, "{}", self.outcome.report)
    }
}

/// Renders a plan after a refresh.
pub struct RefreshResult<'a> {
    pub plan: &'a Plan,
    pub report: &'a AbsorbReport,
}

impl<'a> RefreshResult<'a> {
    pub fn new(plan: &'a Plan, report: &'a AbsorbReport) -> Self {
        Self { plan, report }
    }
}

impl fmt::Display for RefreshResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plan)?;
        write!(f, "{}", self.report)
    }
}

/// Prints nothing when every record matched.
impl fmt::Display for AbsorbReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unmatched() == 0 {
            return Ok(());
        }
        writeln!(f, "\n## Unmatched records")?;
        writeln!(f)?;
        for (label, count) in [
            ("stops", self.unmatched_stops),
            ("vehicles", self.unmatched_vehicles),
            ("depots", self.unmatched_depots),
        ] {
            if count > 0 {
                writeln!(f, "- {count} {label} in the response matched no local entity")?;
            }
        }
        Ok(())
    }
}
