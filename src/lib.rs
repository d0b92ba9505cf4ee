//! confstash - save tool configuration files under short names
//!
//! Registers ESLint, Prettier, Stylelint and Babel configs under a name so
//! they can be referenced later instead of by path.
//!
//! # Features
//!
//! - Validate names against built-in configs and existing registrations
//! - Normalize JSON, YAML, TOML and rc configs to a CommonJS module
//! - Keep the registry in a TOML options file

pub mod cli;
pub mod convert;
pub mod model;
pub mod prompt;
pub mod registry;
pub mod save;

pub use model::{FileType, Options, PackageType};
pub use registry::{FileOptionsStore, MemoryOptionsStore, OptionsStore};
pub use save::{save, Materialization, SaveError, SaveOptions, SaveOutcome};
