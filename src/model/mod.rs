//! Core data models for confstash

mod options;
mod package;

pub use options::{Options, HOME_ENV, SAVED_CONFIG_EXT};
pub use package::{is_reserved_name, parse_file_type, FileType, PackageType};
