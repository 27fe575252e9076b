use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use elasticroute_core::{wire::Emit, ConnectionType};

/// Command-line client for the ElasticRoute vehicle routing service
///
/// Plans are read from JSON files holding an id, stops, vehicles, depots and
/// optional general settings. `validate` and `preview` work offline; `solve`
/// and `refresh` talk to the service with the configured API key.
#[derive(Parser)]
#[command(version, about, name = "er")]
pub struct Args {
    /// Path to the configuration file. Defaults to
    /// $XDG_CONFIG_HOME/elasticroute/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// API key used when the plan file carries none
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Base address of the routing service
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a plan file against the submission rules
    #[command(alias = "v")]
    Validate(PlanFileArgs),
    /// Print the request a solve would send, without sending it
    #[command(alias = "p")]
    Preview(PreviewArgs),
    /// Submit a plan for routing and show the result
    #[command(alias = "s")]
    Solve(SolveArgs),
    /// Fetch the current state of a previously submitted plan
    #[command(alias = "r")]
    Refresh(RefreshArgs),
}

#[derive(clap::Args)]
pub struct PlanFileArgs {
    /// Path to the plan file (JSON)
    pub plan: PathBuf,
}

/// Print the request a solve would send
///
/// Applies the same validation and defaults as `solve` and prints the
/// request path followed by the JSON body.
#[derive(clap::Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub file: PlanFileArgs,

    /// Override the connection type from the plan file
    #[arg(long, value_enum)]
    pub connection: Option<ConnectionArg>,

    /// Emit every set field rather than only changed ones
    #[arg(long)]
    pub all: bool,
}

impl PreviewArgs {
    pub fn emit(&self) -> Emit {
        if self.all {
            Emit::All
        } else {
            Emit::Changed
        }
    }
}

#[derive(clap::Args)]
pub struct SolveArgs {
    #[command(flatten)]
    pub file: PlanFileArgs,

    /// Override the connection type from the plan file
    #[arg(long, value_enum)]
    pub connection: Option<ConnectionArg>,

    /// Keep polling until the plan is planned (poll and webhook modes)
    #[arg(long)]
    pub wait: bool,

    /// Seconds between polls when waiting
    #[arg(long, default_value_t = 5)]
    pub interval: u64,

    /// Maximum number of polls when waiting
    #[arg(long, default_value_t = 60)]
    pub attempts: u32,

    /// Show the per-vehicle routes instead of the full plan
    #[arg(long)]
    pub routes: bool,
}

#[derive(clap::Args)]
pub struct RefreshArgs {
    #[command(flatten)]
    pub file: PlanFileArgs,

    /// Show the per-vehicle routes instead of the full plan
    #[arg(long)]
    pub routes: bool,
}

/// Connection type accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
pub enum ConnectionArg {
    Sync,
    Poll,
    Webhook,
}

impl From<ConnectionArg> for ConnectionType {
    fn from(val: ConnectionArg) -> Self {
        match val {
            ConnectionArg::Sync => ConnectionType::Sync,
            ConnectionArg::Poll => ConnectionType::Poll,
            ConnectionArg::Webhook => ConnectionType::Webhook,
        }
    }
}
