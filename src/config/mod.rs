//! Configuration file handling for assetpack
//!
//! This module contains data structures for:
//! - the compress configuration (`bundles`, `extensions`, `targets`, `assetManager`)
//! - `assets.yaml` - extension bundle manifests

pub mod bundle;
pub mod extension;
pub mod target;

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{self, AssetError, Result};

// Re-export commonly used types
pub use bundle::BundleSpec;
pub use extension::load_extension_manifest;
pub use target::TargetSpec;

/// Top-level options accepted in the configuration file
pub const KNOWN_OPTIONS: [&str; 4] = ["bundles", "extensions", "targets", "assetManager"];

/// Asset manager settings
///
/// Only `basePath` and `baseUrl` are interpreted; any other key is kept so
/// that configurations written for a full asset manager still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetManagerConfig {
    #[serde(default)]
    pub base_path: Option<PathBuf>,

    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl AssetManagerConfig {
    /// Validate that `basePath` and `baseUrl` are present and non-empty
    pub fn validate(&self) -> Result<()> {
        let base_path_missing = self
            .base_path
            .as_ref()
            .is_none_or(|p| p.as_os_str().is_empty());
        if base_path_missing {
            return Err(error::missing_option("basePath", "the 'assetManager' option"));
        }

        let base_url_missing = self.base_url.as_ref().is_none_or(String::is_empty);
        if base_url_missing {
            return Err(error::missing_option("baseUrl", "the 'assetManager' option"));
        }

        Ok(())
    }
}

/// The compress configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptConfig {
    /// Inline bundle definitions; these take priority over extensions
    #[serde(default)]
    pub bundles: IndexMap<String, BundleSpec>,

    /// Directories searched for an `assets.yaml` manifest, in priority order
    #[serde(default)]
    pub extensions: Vec<PathBuf>,

    /// Targets to build, keyed by target name
    #[serde(default)]
    pub targets: IndexMap<String, TargetSpec>,

    #[serde(default)]
    pub asset_manager: AssetManagerConfig,
}

impl ScriptConfig {
    /// Load and validate configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(AssetError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| AssetError::ConfigReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::parse(&content, &path.display().to_string())
    }

    /// Parse and validate configuration from YAML
    ///
    /// `origin` names the source in error messages.
    pub fn parse(yaml: &str, origin: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)
            .map_err(|e| error::config_parse_failed(origin, e.to_string()))?;

        let value = match value {
            serde_yaml::Value::Null => serde_yaml::Value::Mapping(serde_yaml::Mapping::new()),
            serde_yaml::Value::Mapping(mapping) => {
                check_known_options(&mapping)?;
                serde_yaml::Value::Mapping(mapping)
            }
            _ => {
                return Err(error::config_invalid(format!(
                    "{origin}: expected a mapping of configuration options"
                )));
            }
        };

        let config: Self = serde_yaml::from_value(value)
            .map_err(|e| error::config_parse_failed(origin, e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.asset_manager.validate()
    }
}

fn check_known_options(mapping: &serde_yaml::Mapping) -> Result<()> {
    for key in mapping.keys() {
        match key.as_str() {
            Some(name) if KNOWN_OPTIONS.contains(&name) => {}
            Some(name) => return Err(error::unknown_option(name)),
            None => {
                let rendered = serde_yaml::to_string(key).unwrap_or_default();
                return Err(error::unknown_option(rendered.trim()));
            }
        }
    }
    Ok(())
}
