//! Output manifest
//!
//! The manifest maps every target name, and every bundle name a target
//! absorbed, to the fields a consumer needs to load it:
//!
//! ```yaml
//! # Do not modify this file manually as it is automatically generated by "assetpack compress".
//! # @version 2026-10-16 12:00:00
//! all:
//!   js:
//!   - all-1760608800.js
//!   basePath: public/assets
//!   baseUrl: /assets
//! jquery:
//!   depends:
//!   - all
//! ```
//!
//! Empty fields are omitted.

use std::io::Write;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::domain::BuiltTarget;
use crate::error::{self, Result};

/// One manifest entry: a real target or a stub redirecting a bundle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub js: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub css: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl ManifestEntry {
    /// Entry for a built, rewritten target
    pub fn from_target(target: BuiltTarget) -> Self {
        Self {
            js: target.js,
            css: target.css,
            depends: target.depends,
            base_path: Some(target.base_path).filter(|p| !p.as_os_str().is_empty()),
            base_url: Some(target.base_url).filter(|u| !u.is_empty()),
        }
    }

    /// Stub entry redirecting an absorbed bundle to its owning target
    pub fn stub(target: impl Into<String>) -> Self {
        Self {
            depends: vec![target.into()],
            ..Self::default()
        }
    }
}

/// Final name → entry map, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: IndexMap<String, ManifestEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry
    ///
    /// # Errors
    ///
    /// Returns `NameCollision` if `name` already has an entry.
    pub fn insert(&mut self, name: impl Into<String>, entry: ManifestEntry) -> Result<()> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(error::name_collision(name));
        }
        self.entries.insert(name, entry);
        Ok(())
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&ManifestEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Render the manifest as YAML headed by a generation comment
    pub fn to_yaml(&self, generated_at: &str) -> Result<String> {
        let body = serde_yaml::to_string(&self.entries)?;
        Ok(format!(
            "# Do not modify this file manually as it is automatically generated by \"assetpack compress\".\n\
             # @version {generated_at}\n\
             {body}"
        ))
    }

    /// Write the manifest to `path`
    ///
    /// The file is written to a temporary sibling first and renamed into
    /// place, so readers never observe a partial manifest.
    pub fn write(&self, path: &Path) -> Result<()> {
        let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let content = self.to_yaml(&generated_at)?;

        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir).map_err(|e| error::file_write_failed(dir, e))?;

        let mut temp = NamedTempFile::new_in(dir).map_err(|e| error::file_write_failed(path, e))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| error::file_write_failed(path, e))?;
        temp.persist(path)
            .map_err(|e| error::file_write_failed(path, e.error))?;

        Ok(())
    }
}
