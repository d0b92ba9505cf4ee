//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::model::PackageType;

#[derive(Parser)]
#[command(name = "confstash")]
#[command(about = "Save tool configuration files under short names")]
#[command(version)]
#[command(author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Save a config file under a name
    Save {
        /// Config file to save
        file: PathBuf,

        /// Name to save the config as (defaults to the file name)
        #[arg(short, long)]
        name: Option<String>,

        /// Replace an existing config with the same name
        #[arg(short, long)]
        force: bool,

        /// Package the config is for (skips the prompt)
        #[arg(short, long)]
        package: Option<PackageArg>,
    },

    /// List saved configs
    #[command(visible_alias = "ls")]
    List,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PackageArg {
    Eslint,
    Prettier,
    Stylelint,
    Babel,
    /// Any other package (not supported yet)
    Other,
}

impl From<PackageArg> for Option<PackageType> {
    fn from(arg: PackageArg) -> Self {
        match arg {
            PackageArg::Eslint => Some(PackageType::Eslint),
            PackageArg::Prettier => Some(PackageType::Prettier),
            PackageArg::Stylelint => Some(PackageType::Stylelint),
            PackageArg::Babel => Some(PackageType::Babel),
            PackageArg::Other => None,
        }
    }
}
