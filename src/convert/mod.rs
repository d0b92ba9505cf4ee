//! Reading config files into memory and writing the uniform script format

use serde_json::Value;
use std::path::Path;

use crate::model::FileType;

const EXPORTS_PREFIX: &str = "module.exports =";

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported config file: {0}")]
    UnsupportedFile(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Cannot evaluate JavaScript config {0}; only `module.exports = <JSON>;` files can be read")]
    Script(String),
}

/// Parse a config file into an in-memory value
pub fn read_config_file(path: &Path) -> Result<Value, ConvertError> {
    let file_type = FileType::from_path(path)
        .ok_or_else(|| ConvertError::UnsupportedFile(path.display().to_string()))?;
    let content = std::fs::read_to_string(path)?;
    parse_config(&content, file_type).map_err(|e| match e {
        ConvertError::Script(_) => ConvertError::Script(path.display().to_string()),
        other => other,
    })
}

/// Parse config content of a known file type
pub fn parse_config(content: &str, file_type: FileType) -> Result<Value, ConvertError> {
    match file_type {
        FileType::Json => Ok(serde_json::from_str(content)?),
        FileType::Yaml => Ok(serde_yaml::from_str(content)?),
        FileType::Toml => Ok(toml::from_str(content)?),
        // rc files carry either JSON or YAML
        FileType::Rc => match serde_json::from_str(content) {
            Ok(value) => Ok(value),
            Err(_) => Ok(serde_yaml::from_str(content)?),
        },
        FileType::Js => parse_exports(content),
    }
}

fn parse_exports(content: &str) -> Result<Value, ConvertError> {
    let body = content
        .trim()
        .strip_prefix(EXPORTS_PREFIX)
        .ok_or_else(|| ConvertError::Script(String::new()))?;
    let body = body.trim_end().trim_end_matches(';');
    serde_json::from_str(body).map_err(|_| ConvertError::Script(String::new()))
}

/// Serialize a config value as a CommonJS module
pub fn create_js_file(config: &Value) -> String {
    // Value serialization cannot fail: map keys are always strings
    let body = serde_json::to_string_pretty(config).unwrap_or_else(|_| "{}".to_string());
    format!("{} {};\n", EXPORTS_PREFIX, body)
}
