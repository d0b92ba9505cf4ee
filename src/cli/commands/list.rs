//! List command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;
use crate::model::{Options, PackageType};
use crate::registry::OptionsStore;

/// Get terminal width, defaulting to 80 if unable to detect
fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Truncate a string to fit within max_width, adding "..." if truncated
fn truncate_value(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        format!("{}...", s.chars().take(max_width - 3).collect::<String>())
    }
}

/// Execute the list command
pub fn execute(ctx: &Context) -> Result<()> {
    let options = ctx.store.load()?;

    if options.custom_configs.is_empty() {
        ctx.print_warning("No saved configs. Use 'confstash save <FILE>' to add one.");
        return Ok(());
    }

    let name_w = options
        .custom_configs
        .keys()
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(4, 30);
    let package_w = 10;
    let path_w = get_terminal_width()
        .saturating_sub(name_w + package_w + 4)
        .max(20);

    println!(
        "{:<name_w$} {:<package_w$} {}",
        "NAME".bold().cyan(),
        "PACKAGE".bold().cyan(),
        "PATH".bold().cyan(),
    );

    for (name, package) in &options.custom_configs {
        let path = Options::saved_config_path(&ctx.config_dir, name);
        let path_display = truncate_value(&path.display().to_string(), path_w);
        let path_colored = if path.exists() {
            path_display.dimmed()
        } else {
            format!("{} (missing)", path_display).red()
        };

        println!(
            "{:<name_w$} {:<package_w$} {}",
            truncate_value(name, name_w).white(),
            color_package(*package),
            path_colored,
        );
    }

    println!();
    println!(
        "{}",
        format!("Total: {} saved configs", options.custom_configs.len()).dimmed()
    );

    Ok(())
}

fn color_package(package: PackageType) -> colored::ColoredString {
    let name = package.name();
    match package {
        PackageType::Eslint => name.magenta(),
        PackageType::Prettier => name.yellow(),
        PackageType::Stylelint => name.blue(),
        PackageType::Babel => name.green(),
    }
}
