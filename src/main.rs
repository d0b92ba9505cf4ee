//! confstash - save tool configs under short names

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use confstash::cli::{commands, Cli, Context};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let ctx = Context::new();
    tracing::debug!(config_dir = %ctx.config_dir.display(), "using config directory");

    commands::run(&ctx, &cli.command)
}
