//! Package chooser prompts

use anyhow::Result;
use dialoguer::Select;

use crate::model::PackageType;

/// Asks which package a config belongs to.
///
/// `Ok(None)` means "other": a package confstash has no support for.
pub trait PackageChooser {
    fn choose(&self) -> Result<Option<PackageType>>;
}

/// Interactive terminal selection
pub struct SelectChooser;

const OTHER_LABEL: &str = "Other";

impl PackageChooser for SelectChooser {
    fn choose(&self) -> Result<Option<PackageType>> {
        let mut items: Vec<&str> = PackageType::ALL.iter().map(|p| p.name()).collect();
        items.push(OTHER_LABEL);

        let selection = Select::new()
            .with_prompt("Which package is this config for?")
            .items(&items)
            .default(0)
            .interact()?;

        Ok(PackageType::ALL.get(selection).copied())
    }
}

/// Answers with a fixed choice, no terminal needed
pub struct PresetChooser(pub Option<PackageType>);

impl PackageChooser for PresetChooser {
    fn choose(&self) -> Result<Option<PackageType>> {
        Ok(self.0)
    }
}
