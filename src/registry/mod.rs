//! Registry of user-saved configs
//!
//! The registry lives in the options file. Commands go through the
//! [`OptionsStore`] trait so the orchestrator never touches global state and
//! tests can swap in [`MemoryOptionsStore`].

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::model::{Options, PackageType};

/// Load/save access to the options file
pub trait OptionsStore {
    /// Load the current options
    fn load(&self) -> Result<Options>;

    /// Record `name -> package`, replacing any existing entry
    fn save_custom_config(&self, name: &str, package: PackageType) -> Result<()>;

    /// Drop the entry for `name` if present
    fn remove_custom_config(&self, name: &str) -> Result<()>;

    /// Whether a custom config called `name` is registered
    fn contains(&self, name: &str) -> Result<bool> {
        Ok(self.load()?.custom_configs.contains_key(name))
    }
}

/// Options store backed by `<dir>/options.toml`
pub struct FileOptionsStore {
    path: PathBuf,
}

impl FileOptionsStore {
    pub fn new(config_dir: &Path) -> Self {
        Self {
            path: Options::options_path(config_dir),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn update(&self, f: impl FnOnce(&mut Options)) -> Result<()> {
        let mut options = self.load()?;
        f(&mut options);
        options
            .save_to(&self.path)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

impl OptionsStore for FileOptionsStore {
    fn load(&self) -> Result<Options> {
        Options::load_from(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))
    }

    fn save_custom_config(&self, name: &str, package: PackageType) -> Result<()> {
        self.update(|options| {
            options.custom_configs.insert(name.to_string(), package);
        })
    }

    fn remove_custom_config(&self, name: &str) -> Result<()> {
        self.update(|options| {
            options.custom_configs.remove(name);
        })
    }
}

/// In-memory options store
#[derive(Default)]
pub struct MemoryOptionsStore {
    options: RefCell<Options>,
}

impl MemoryOptionsStore {
    pub fn new(options: Options) -> Self {
        Self {
            options: RefCell::new(options),
        }
    }

    pub fn snapshot(&self) -> Options {
        self.options.borrow().clone()
    }
}

impl OptionsStore for MemoryOptionsStore {
    fn load(&self) -> Result<Options> {
        Ok(self.snapshot())
    }

    fn save_custom_config(&self, name: &str, package: PackageType) -> Result<()> {
        self.options
            .borrow_mut()
            .custom_configs
            .insert(name.to_string(), package);
        Ok(())
    }

    fn remove_custom_config(&self, name: &str) -> Result<()> {
        self.options.borrow_mut().custom_configs.remove(name);
        Ok(())
    }
}
