//! Package types and the file formats each one accepts

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tools a saved configuration can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    Eslint,
    Prettier,
    Stylelint,
    Babel,
}

/// On-disk formats a configuration file can come in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// CommonJS module (`.js`, `.cjs`), the uniform script format
    Js,
    Json,
    Yaml,
    Toml,
    /// Extensionless rc file (`.eslintrc`), JSON or YAML content
    Rc,
}

impl PackageType {
    pub const ALL: [PackageType; 4] = [
        PackageType::Eslint,
        PackageType::Prettier,
        PackageType::Stylelint,
        PackageType::Babel,
    ];

    /// Get package name as string
    pub fn name(&self) -> &'static str {
        match self {
            PackageType::Eslint => "eslint",
            PackageType::Prettier => "prettier",
            PackageType::Stylelint => "stylelint",
            PackageType::Babel => "babel",
        }
    }

    /// File types this package reads its configuration from
    pub fn file_types(&self) -> &'static [FileType] {
        use FileType::*;
        match self {
            PackageType::Eslint => &[Js, Json, Yaml, Rc],
            PackageType::Prettier => &[Js, Json, Yaml, Toml, Rc],
            PackageType::Stylelint => &[Js, Json, Yaml, Rc],
            PackageType::Babel => &[Js, Json, Rc],
        }
    }

    /// Config names shipped with this package
    pub fn built_in_configs(&self) -> &'static [&'static str] {
        match self {
            PackageType::Eslint => &["default", "eslint", "airbnb", "standard", "google"],
            PackageType::Prettier => &["default", "prettier"],
            PackageType::Stylelint => &["default", "stylelint", "recommended", "standard"],
            PackageType::Babel => &["default", "babel"],
        }
    }
}

impl std::fmt::Display for PackageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for PackageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eslint" => Ok(PackageType::Eslint),
            "prettier" => Ok(PackageType::Prettier),
            "stylelint" => Ok(PackageType::Stylelint),
            "babel" => Ok(PackageType::Babel),
            _ => Err(format!("Unknown package type: {}", s)),
        }
    }
}

impl FileType {
    /// Map an extension (with or without the leading dot) to a file type.
    /// An empty extension is an rc file.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "" => Some(FileType::Rc),
            "js" | "cjs" => Some(FileType::Js),
            "json" => Some(FileType::Json),
            "yaml" | "yml" => Some(FileType::Yaml),
            "toml" => Some(FileType::Toml),
            _ => None,
        }
    }

    /// Detect the file type of a path from its extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default();
        Self::from_extension(&ext)
    }
}

/// Resolve whether `ext` is a config format accepted by `package`
pub fn parse_file_type(ext: &str, package: PackageType) -> Option<FileType> {
    FileType::from_extension(ext).filter(|ft| package.file_types().contains(ft))
}

/// Whether `name` collides with any package's built-in config
pub fn is_reserved_name(name: &str) -> bool {
    PackageType::ALL
        .iter()
        .any(|p| p.built_in_configs().contains(&name))
}
