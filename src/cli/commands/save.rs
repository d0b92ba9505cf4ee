//! Save command implementation

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use crate::cli::args::PackageArg;
use crate::cli::context::Context;
use crate::prompt::{PackageChooser, PresetChooser, SelectChooser};
use crate::save::{save, SaveOptions};

/// Execute the save command
pub fn execute(
    ctx: &Context,
    file: &Path,
    name: Option<String>,
    force: bool,
    package: Option<PackageArg>,
) -> Result<ExitCode> {
    let chooser: Box<dyn PackageChooser> = match package {
        Some(arg) => Box::new(PresetChooser(arg.into())),
        None => Box::new(SelectChooser),
    };
    let options = SaveOptions { name, force };

    match save(file, &options, &ctx.store, chooser.as_ref(), &ctx.config_dir) {
        Ok(outcome) => {
            ctx.print_success(&format!("Successfully saved {}.", outcome.name.cyan()));
            println!(
                "  {} {}",
                outcome.package.to_string().dimmed(),
                outcome.path.display().to_string().dimmed()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            ctx.print_error(&e.to_string());
            Ok(ExitCode::FAILURE)
        }
    }
}
