//! Inference configuration
//!
//! Holds the user-supplied field-to-type override mapping and the example
//! policy. Loaded from YAML (or JSON, which YAML accepts) and passed to the
//! inferrer explicitly.

use crate::error::{Error, Result};
use crate::types::ExamplePolicy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Configuration read once per inference pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Field selector (`Type.path.field`) to known type name
    #[serde(default)]
    pub mapping: BTreeMap<String, String>,

    /// Representative picking when records disagree on a field
    #[serde(default)]
    pub example_policy: ExamplePolicy,
}

impl InferenceConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an override mapping entry
    #[must_use]
    pub fn with_mapping(mut self, selector: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.mapping.insert(selector.into(), type_name.into());
        self
    }

    /// Set the example policy
    #[must_use]
    pub fn with_example_policy(mut self, policy: ExamplePolicy) -> Self {
        self.example_policy = policy;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for (selector, type_name) in &self.mapping {
            let segments = selector.split('.').filter(|s| !s.is_empty()).count();
            if segments < 2 {
                return Err(Error::invalid_value(
                    "mapping",
                    format!("selector '{selector}' must name a record type and a field"),
                ));
            }
            if type_name.trim().is_empty() {
                return Err(Error::invalid_value(
                    "mapping",
                    format!("selector '{selector}' maps to an empty type name"),
                ));
            }
        }
        Ok(())
    }
}

/// Load configuration from a YAML or JSON file
pub fn load_config(path: impl AsRef<Path>) -> Result<InferenceConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_config_from_str(&content)
}

/// Load configuration from a YAML or JSON string
pub fn load_config_from_str(text: &str) -> Result<InferenceConfig> {
    if text.trim().is_empty() {
        return Ok(InferenceConfig::default());
    }

    let config: InferenceConfig = serde_yaml::from_str(text)
        .map_err(|e| Error::config(format!("Failed to parse config: {e}")))?;

    config.validate()?;
    Ok(config)
}
