//! ElasticRoute CLI Application
//!
//! Command-line interface for validating, previewing and solving route plans.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, ConfigOverrides};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        api_key,
        base_url,
        no_color,
        command,
    } = Args::parse();

    let overrides = ConfigOverrides {
        path: config,
        api_key,
        base_url,
    };
    let cli = Cli::new(overrides, TerminalRenderer::new(!no_color));

    info!("er started");

    match command {
        Validate(args) => cli.validate(&args),
        Preview(args) => cli.preview(&args),
        Solve(args) => cli.solve(&args).await,
        Refresh(args) => cli.refresh(&args).await,
    }
}
