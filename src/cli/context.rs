//! Command execution context

use colored::Colorize;
use std::path::PathBuf;

use crate::model::Options;
use crate::registry::FileOptionsStore;

/// Common context for command execution
pub struct Context {
    pub config_dir: PathBuf,
    pub store: FileOptionsStore,
}

impl Context {
    pub fn new() -> Self {
        Self::with_config_dir(Options::config_dir())
    }

    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        let store = FileOptionsStore::new(&config_dir);
        Self { config_dir, store }
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
