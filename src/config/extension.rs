//! Extension manifests
//!
//! An extension directory may ship an `assets.yaml` mapping bundle names to
//! partial bundle definitions. The file is optional.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use super::bundle::BundleSpec;
use crate::error::{self, AssetError, Result};

/// File name looked up under every extension search path
pub const EXTENSION_MANIFEST: &str = "assets.yaml";

/// Load the extension manifest under `dir`
///
/// Returns `Ok(None)` when the directory has no manifest.
pub fn load_extension_manifest(dir: &Path) -> Result<Option<IndexMap<String, BundleSpec>>> {
    let manifest_path = dir.join(EXTENSION_MANIFEST);

    if !manifest_path.is_file() {
        return Ok(None);
    }

    let content = fs::read_to_string(&manifest_path).map_err(|e| AssetError::ConfigReadFailed {
        path: manifest_path.display().to_string(),
        reason: e.to_string(),
    })?;

    if content.trim().is_empty() {
        return Ok(Some(IndexMap::new()));
    }

    let bundles: IndexMap<String, BundleSpec> = serde_yaml::from_str(&content)
        .map_err(|e| {
            error::config_parse_failed(manifest_path.display().to_string(), e.to_string())
        })?;

    Ok(Some(bundles))
}
