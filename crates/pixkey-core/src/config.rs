//! # Configuration
//!
//! Settings for a [`PixKeyEngine`](crate::PixKeyEngine), loaded from YAML:
//!
//! ```yaml
//! default_region: BR
//! ```
//!
//! Every field has a default, so an empty file is a valid configuration.
//! `PIXKEY_DEFAULT_REGION` in the environment overrides the file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PixKeyError;
use crate::region::Region;

/// Environment variable overriding [`PixKeyConfig::default_region`].
pub const REGION_ENV_VAR: &str = "PIXKEY_DEFAULT_REGION";

/// Engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PixKeyConfig {
    /// Region assumed for phone numbers written without a country code.
    #[serde(default)]
    pub default_region: Region,
}

impl PixKeyConfig {
    /// Parse a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`PixKeyError::Config`] on malformed YAML, unknown fields, or
    /// an invalid region code.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, PixKeyError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| PixKeyError::Config(e.to_string()))
    }

    /// Read and parse a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`PixKeyError::Io`] if the file cannot be read, otherwise as
    /// [`PixKeyConfig::from_yaml_str`].
    pub fn load(path: &Path) -> Result<Self, PixKeyError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml).map_err(|e| match e {
            PixKeyError::Config(msg) => PixKeyError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Apply [`REGION_ENV_VAR`] from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, PixKeyError> {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup. Blank values are
    /// ignored.
    pub fn with_overrides_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, PixKeyError> {
        if let Some(value) = lookup(REGION_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            self.default_region = Region::new(value)?;
        }
        Ok(self)
    }
}
