//! Saving a config file under a name
//!
//! Every check runs before anything is written. Once the registry entry is
//! committed the config file is materialized; if that fails the registry is
//! put back the way it was, so a name never points at a missing file.

use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::convert::{create_js_file, read_config_file};
use crate::model::{is_reserved_name, parse_file_type, FileType, Options, PackageType};
use crate::prompt::PackageChooser;
use crate::registry::OptionsStore;

/// User options for a save
#[derive(Debug, Clone, Default)]
pub struct SaveOptions {
    /// Overrides the name derived from the file path
    pub name: Option<String>,
    /// Allow replacing an existing saved config
    pub force: bool,
}

/// How the source file becomes the saved config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Materialization {
    /// Already in the uniform script format, copied byte for byte
    Copy,
    /// Parsed and re-serialized as a script
    Reserialize(FileType),
}

impl Materialization {
    pub fn for_file_type(file_type: FileType) -> Self {
        match file_type {
            FileType::Js => Materialization::Copy,
            other => Materialization::Reserialize(other),
        }
    }
}

/// Result of a successful save
#[derive(Debug, Clone)]
pub struct SaveOutcome {
    pub name: String,
    pub package: PackageType,
    pub path: PathBuf,
    pub materialization: Materialization,
    /// An entry with this name existed and was replaced
    pub overwritten: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("Error: {0} conflicts with built in config with the same name. Please provide a different name using the '--name' option.")]
    NameConflict(String),

    #[error("Error: '{0}' is not a valid config name. Please provide a different name using the '--name' option.")]
    InvalidName(String),

    #[error("{0} already exists! If you wish to replace it use the '--force' option.")]
    AlreadyExists(String),

    #[error("Custom package configs are currently not supported.")]
    UnsupportedPackage,

    #[error("Error: {ext} file type is not supported by {package}")]
    UnsupportedFileType { ext: String, package: PackageType },

    #[error("Package selection failed: {0:#}")]
    Prompt(#[source] anyhow::Error),

    #[error("Failed to access the config registry: {0:#}")]
    Registry(#[source] anyhow::Error),

    #[error("An error occurred while saving {name}:\n{source:#}")]
    Persistence {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Save `config_file` under a name in `config_dir`, recording it in `store`
pub fn save(
    config_file: &Path,
    options: &SaveOptions,
    store: &dyn OptionsStore,
    chooser: &dyn PackageChooser,
    config_dir: &Path,
) -> Result<SaveOutcome, SaveError> {
    let config_name = config_name(config_file, options)?;
    debug!(config = %config_name, file = %config_file.display(), "saving config");

    if is_reserved_name(&config_name) {
        return Err(SaveError::NameConflict(config_name));
    }

    let registry = store.load().map_err(SaveError::Registry)?;
    let previous = registry.custom_configs.get(&config_name).copied();
    if previous.is_some() && !options.force {
        return Err(SaveError::AlreadyExists(config_name));
    }

    let package = chooser
        .choose()
        .map_err(SaveError::Prompt)?
        .ok_or(SaveError::UnsupportedPackage)?;

    let ext = config_file
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let file_type = parse_file_type(&ext, package)
        .ok_or_else(|| SaveError::UnsupportedFileType {
            ext: ext.clone(),
            package,
        })?;
    let materialization = Materialization::for_file_type(file_type);
    debug!(%package, ?materialization, "resolved file type");

    store
        .save_custom_config(&config_name, package)
        .map_err(SaveError::Registry)?;

    let dest = Options::saved_config_path(config_dir, &config_name);
    if let Err(source) = materialize(config_file, &dest, materialization) {
        rollback(store, &config_name, previous);
        return Err(SaveError::Persistence {
            name: config_name,
            source,
        });
    }

    info!(config = %config_name, path = %dest.display(), "config saved");
    Ok(SaveOutcome {
        name: config_name,
        package,
        path: dest,
        materialization,
        overwritten: previous.is_some(),
    })
}

/// `--name` when given, otherwise the file name without its extension
fn config_name(config_file: &Path, options: &SaveOptions) -> Result<String, SaveError> {
    let name = match options.name.as_deref().filter(|n| !n.is_empty()) {
        Some(name) => name.to_string(),
        None => config_file
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default(),
    };

    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(SaveError::InvalidName(name));
    }
    Ok(name)
}

fn materialize(source: &Path, dest: &Path, materialization: Materialization) -> anyhow::Result<()> {
    let configs_dir = dest
        .parent()
        .context("Saved config path has no parent directory")?;
    std::fs::create_dir_all(configs_dir)
        .with_context(|| format!("Failed to create {}", configs_dir.display()))?;

    match materialization {
        Materialization::Copy => {
            // Copying a file onto itself would truncate it
            if is_same_file(source, dest) {
                return Ok(());
            }
            std::fs::copy(source, dest).with_context(|| {
                format!("Failed to copy {} to {}", source.display(), dest.display())
            })?;
        }
        Materialization::Reserialize(_) => {
            let config = read_config_file(source)?;
            std::fs::write(dest, create_js_file(&config))
                .with_context(|| format!("Failed to write {}", dest.display()))?;
        }
    }
    Ok(())
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn rollback(store: &dyn OptionsStore, name: &str, previous: Option<PackageType>) {
    let restored = match previous {
        Some(package) => store.save_custom_config(name, package),
        None => store.remove_custom_config(name),
    };
    if let Err(e) = restored {
        error!(config = %name, error = %e, "failed to roll back registry entry");
    }
}
