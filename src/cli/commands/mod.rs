//! CLI command implementations

pub mod list;
pub mod save;

use anyhow::Result;
use std::process::ExitCode;

use crate::cli::args::Commands;
use crate::cli::context::Context;

/// Dispatch a parsed subcommand
pub fn run(ctx: &Context, command: &Commands) -> Result<ExitCode> {
    match command {
        Commands::Save {
            file,
            name,
            force,
            package,
        } => save::execute(ctx, file, name.clone(), *force, *package),
        Commands::List => list::execute(ctx).map(|_| ExitCode::SUCCESS),
    }
}
