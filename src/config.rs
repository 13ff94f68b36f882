// Optional TOML overrides for the demo inputs.
// Every table and key falls back to the fixed literals when absent.

use crate::error::{DemoError, Result};
use crate::string_walk;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub array: ArrayConfig,
    pub pointer: PointerConfig,
    pub string: StringConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArrayConfig {
    pub numbers: Vec<i32>,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            numbers: vec![5, 6, 7, 22, 3, 1, 4, 6, 0, 3, 6, 6, 2, 2, 5],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PointerConfig {
    pub integer: i32,
    pub float: f32,
    pub double: f64,
    pub boolean: bool,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            integer: 140,
            float: 14.75,
            double: 40.25,
            boolean: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StringConfig {
    pub text: String,
}

impl Default for StringConfig {
    fn default() -> Self {
        Self {
            text: "readmefile".to_string(),
        }
    }
}

impl DemoConfig {
    /// Parses a TOML document. `origin` only labels errors.
    pub fn from_toml_str(src: &str, origin: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(src).map_err(|source| DemoError::ParseConfig {
            origin: origin.to_string(),
            source,
        })?;
        string_walk::ensure_no_sentinel(&config.string.text)?;
        debug!(
            origin,
            numbers = config.array.numbers.len(),
            text_len = config.string.text.chars().count(),
            "parsed demo config"
        );
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| DemoError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content, &path.display().to_string())?;
        info!(path = %path.display(), "loaded demo config");
        Ok(config)
    }

    /// Uses the file when one is given, otherwise the built-in literals.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("no config file given, using built-in inputs");
                Ok(Self::default())
            }
        }
    }
}
